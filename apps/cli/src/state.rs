use crate::config::Config;
use crate::console::Console;
use crate::errors::{AppError, AppResult};
use crate::sample::SampleData;
use crate::validation::MessageCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prompt the user for every field.
    Interactive,
    /// Fill every section from the bundled sample data.
    Automated,
}

/// Per-run state threaded through the validator, collectors and controller.
pub struct Session<C: Console> {
    pub console: C,
    pub mode: Mode,
    pub messages: MessageCatalog,
    pub sample: SampleData,
    pub config: Config,
}

impl<C: Console> Session<C> {
    pub fn new(
        console: C,
        mode: Mode,
        messages: MessageCatalog,
        sample: SampleData,
        config: Config,
    ) -> Self {
        Self {
            console,
            mode,
            messages,
            sample,
            config,
        }
    }

    pub fn is_automated(&self) -> bool {
        self.mode == Mode::Automated
    }

    /// Reads one raw line without validation. End of input cancels the run.
    pub fn read(&mut self, prompt: &str) -> AppResult<String> {
        self.console.read_line(prompt)?.ok_or(AppError::Cancelled)
    }

    /// `y` or `Y` means yes; anything else means no.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = self.read(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    pub fn say(&mut self, text: &str) -> AppResult<()> {
        self.console.print_line(text)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::session;
    use super::*;

    #[test]
    fn test_confirm_is_case_insensitive() {
        let mut s = session(Mode::Interactive, ["Y", "y", "yes", "n", ""]);
        assert!(s.confirm("Again? ").unwrap());
        assert!(s.confirm("Again? ").unwrap());
        assert!(!s.confirm("Again? ").unwrap());
        assert!(!s.confirm("Again? ").unwrap());
        assert!(!s.confirm("Again? ").unwrap());
    }

    #[test]
    fn test_read_at_end_of_input_cancels() {
        let mut s = session(Mode::Interactive, Vec::<String>::new());
        assert!(matches!(s.read("> "), Err(AppError::Cancelled)));
    }
}
