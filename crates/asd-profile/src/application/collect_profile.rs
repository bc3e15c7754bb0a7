//! CollectProfileUseCase: gathers one profile through sequential prompts.
//!
//! Prompt order and rules:
//!
//! ```text
//! name            required, asked again until non-blank
//! mirrorUrl       optional, blank skips
//! forceOverwrite  yes/no, asked again until recognised, blank = no
//! repo            blank = nostalgia296/asd
//! chooseTag       optional, blank skips
//! path            optional, blank skips
//! latest          yes/no, asked again until recognised, blank = no
//! ```
//!
//! Every answer is trimmed before it is checked.  The only way collection
//! fails is the terminal itself failing or closing.

use asd_core::{Profile, ProfileName, DEFAULT_REPO};
use thiserror::Error;

/// Errors raised by a [`Prompt`] implementation.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Standard input reached end of file while an answer was expected.
    #[error("input closed before an answer was given")]
    Closed,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}

/// Line-based question/answer channel to the user.
///
/// The production implementation talks to stdin/stdout; tests use
/// [`ScriptedPrompt`](crate::infrastructure::terminal::ScriptedPrompt).
pub trait Prompt {
    /// Shows `question` and returns the raw answer line without its line ending.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;

    /// Shows one line of output.
    fn say(&mut self, line: &str) -> Result<(), PromptError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        (**self).ask(question)
    }

    fn say(&mut self, line: &str) -> Result<(), PromptError> {
        (**self).say(line)
    }
}

const YES_TOKENS: [&str; 5] = ["y", "yes", "1", "true", "是"];
const NO_TOKENS: [&str; 6] = ["", "n", "no", "0", "false", "否"];

/// Interprets a yes/no answer.
///
/// Matching is case-insensitive on the trimmed answer.  A blank answer means
/// "no".  Returns `None` for anything unrecognised.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    let answer = answer.trim().to_lowercase();
    if YES_TOKENS.contains(&answer.as_str()) {
        Some(true)
    } else if NO_TOKENS.contains(&answer.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Runs the full prompt sequence and returns the collected profile.
///
/// # Errors
///
/// Returns [`PromptError`] only if the terminal fails or input is closed.
pub fn collect_profile<P: Prompt + ?Sized>(prompt: &mut P) -> Result<Profile, PromptError> {
    print_header(prompt)?;
    prompt.say("Enter the profile settings:")?;

    let name = loop {
        let answer = prompt.ask("Name (required): ")?;
        match ProfileName::new(answer.trim()) {
            Ok(name) => break name,
            Err(_) => {
                prompt.say("Error: a name is required, please try again.")?;
                prompt.say("")?;
            }
        }
    };
    let mut profile = Profile::new(name);

    prompt.say("")?;
    profile.mirror_url = ask_optional(prompt, "Mirror URL (optional, press Enter to skip): ")?;

    prompt.say("")?;
    profile.force_overwrite = ask_yes_no(prompt, "Force overwrite? (y/n, default: n): ")?;

    prompt.say("")?;
    let repo_question = format!("Repository (default: {DEFAULT_REPO}): ");
    if let Some(repo) = ask_optional(prompt, &repo_question)? {
        profile.repo = repo;
    }

    prompt.say("")?;
    profile.choose_tag = ask_optional(prompt, "Tag to choose (optional, press Enter to skip): ")?;

    prompt.say("")?;
    profile.path = ask_optional(prompt, "Path (optional, press Enter to skip): ")?;

    prompt.say("")?;
    profile.latest = ask_yes_no(prompt, "Use the latest release? (y/n, default: n): ")?;

    Ok(profile)
}

fn print_header<P: Prompt + ?Sized>(prompt: &mut P) -> Result<(), PromptError> {
    let rule = "=".repeat(50);
    prompt.say(&rule)?;
    prompt.say("           ASD profile generator")?;
    prompt.say(&rule)?;
    prompt.say("")
}

/// Asks once; a blank answer yields `None`.
fn ask_optional<P: Prompt + ?Sized>(
    prompt: &mut P,
    question: &str,
) -> Result<Option<String>, PromptError> {
    let answer = prompt.ask(question)?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}

/// Asks until the answer is a recognised yes/no token.
fn ask_yes_no<P: Prompt + ?Sized>(prompt: &mut P, question: &str) -> Result<bool, PromptError> {
    loop {
        let answer = prompt.ask(question)?;
        if let Some(value) = parse_yes_no(&answer) {
            return Ok(value);
        }
        prompt.say("Please enter 'y' or 'n'")?;
    }
}
