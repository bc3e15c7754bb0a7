//! Terminal infrastructure: line-based prompts over stdin/stdout.
//!
//! [`Terminal`] is generic over its reader and writer so it can be driven by
//! in-memory buffers as well as the process's standard streams.
//!
//! # Testability
//!
//! [`scripted::ScriptedPrompt`] implements the same [`Prompt`] trait with a
//! fixed list of answers and records everything shown to the user.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::application::collect_profile::{Prompt, PromptError};

pub mod scripted;

pub use scripted::ScriptedPrompt;

/// Prompt backed by a reader for answers and a writer for output.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Creates a terminal over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the terminal and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for Terminal<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
