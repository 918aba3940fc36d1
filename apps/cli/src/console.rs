use std::io::{self, BufRead, Write};

/// Line-oriented terminal I/O used by the validator, collectors and controller.
pub trait Console {
    /// Writes `prompt` without a newline and reads one line of input with the
    /// line terminator removed. Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn print_line(&mut self, text: &str) -> io::Result<()>;
}

/// Console backed by the process's stdin and stdout.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.stdout.lock();
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout.lock(), "{text}")
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::io;

    use super::Console;

    /// Replays canned answers and records everything written, prompts included.
    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        inputs: VecDeque<io::Result<String>>,
        pub transcript: String,
    }

    impl ScriptedConsole {
        pub fn new<I, S>(inputs: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                inputs: inputs.into_iter().map(|s| Ok(s.into())).collect(),
                transcript: String::new(),
            }
        }

        /// Queues a read failure after the answers already scripted.
        pub fn then_fail(mut self, kind: io::ErrorKind, message: &str) -> Self {
            self.inputs.push_back(Err(io::Error::new(kind, message.to_string())));
            self
        }

        pub fn then_chain(mut self, answers: &[&str]) -> Self {
            self.inputs
                .extend(answers.iter().map(|a| Ok(a.to_string())));
            self
        }

        pub fn then(mut self, answer: &str) -> Self {
            self.inputs.push_back(Ok(answer.to_string()));
            self
        }

        pub fn occurrences(&self, needle: &str) -> usize {
            self.transcript.matches(needle).count()
        }

        pub fn remaining(&self) -> usize {
            self.inputs.len()
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.transcript.push_str(prompt);
            match self.inputs.pop_front() {
                Some(Ok(line)) => {
                    self.transcript.push_str(&line);
                    self.transcript.push('\n');
                    Ok(Some(line))
                }
                Some(Err(e)) => Err(e),
                None => Ok(None),
            }
        }

        fn print_line(&mut self, text: &str) -> io::Result<()> {
            self.transcript.push_str(text);
            self.transcript.push('\n');
            Ok(())
        }
    }
}
