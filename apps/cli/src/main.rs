mod cli;
mod collectors;
mod config;
mod console;
mod controller;
mod errors;
mod models;
mod render;
mod sample;
mod state;
mod validation;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::console::StdConsole;
use crate::errors::AppError;
use crate::sample::SampleData;
use crate::state::Session;
use crate::validation::MessageCatalog;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Diagnostics go to stderr; stdout carries the prompts and the resume
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-cli v{}", env!("CARGO_PKG_VERSION"));

    // An interrupt ends the run at once, without a partial resume
    ctrlc::set_handler(|| {
        println!("\n{}", AppError::Cancelled);
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")?;

    let messages = MessageCatalog::load()?;
    let sample = SampleData::bundled()?;
    let mut session = Session::new(StdConsole::new(), cli.mode(), messages, sample, config);
    info!(mode = ?session.mode, "Session ready");

    let result = controller::run(&mut session);
    controller::report(&mut session, result)?;

    Ok(())
}
