use clap::Parser;

use crate::state::Mode;

/// Resume Generator
#[derive(Parser, Debug)]
#[command(name = "resume-cli", version, about = "Resume Generator")]
pub struct Cli {
    /// Use sample data to generate resume
    #[arg(long)]
    pub automated: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.automated {
            Mode::Automated
        } else {
            Mode::Interactive
        }
    }
}
