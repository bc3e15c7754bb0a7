//! Scripted prompt for unit and integration testing.
//!
//! Plays back a fixed list of answers and records every question and output
//! line, so tests can assert on what the user would have seen without a real
//! terminal.

use std::collections::VecDeque;

use crate::application::collect_profile::{Prompt, PromptError};

/// A [`Prompt`] that answers from a queue.
///
/// When the queue runs dry, [`Prompt::ask`] returns [`PromptError::Closed`],
/// exactly like a terminal whose stdin reached end of file.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    questions: Vec<String>,
    output: Vec<String>,
}

impl ScriptedPrompt {
    /// Creates a prompt that will give `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every question asked so far, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Every line passed to [`Prompt::say`] so far, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns `true` once every scripted answer has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    /// Returns `true` if any output line contains `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }

    fn say(&mut self, line: &str) -> Result<(), PromptError> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_answers_in_order() {
        // Arrange
        let mut prompt = ScriptedPrompt::new(["first", "second"]);

        // Act / Assert
        assert_eq!(prompt.ask("1?").unwrap(), "first");
        assert_eq!(prompt.ask("2?").unwrap(), "second");
        assert!(prompt.is_exhausted());
        assert_eq!(prompt.questions(), ["1?", "2?"]);
    }

    #[test]
    fn test_scripted_prompt_reports_closed_when_out_of_answers() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        assert!(matches!(prompt.ask("?"), Err(PromptError::Closed)));
    }

    #[test]
    fn test_scripted_prompt_records_output() {
        let mut prompt = ScriptedPrompt::default();
        prompt.say("No profile added.").unwrap();
        assert!(!prompt.said("not added"));
        assert!(prompt.said("No profile added"));
        assert_eq!(prompt.output().len(), 1);
    }
}
