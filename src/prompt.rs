//! User input and interaction handling.
//! Answers either come from an interactive terminal prompt or are preloaded
//! from the command line or stdin.

use crate::context::{Answers, APPLICATION_NAME};
use crate::error::{Error, Result};
use dialoguer::Input;
use std::io::Read;

/// Supplies the answers a scaffold needs.
pub trait Prompter {
    /// Blocks until every required answer is available.
    fn answers(&self) -> Result<Answers>;
}

/// Asks on the terminal, re-asking until the application name is non-empty.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn answers(&self) -> Result<Answers> {
        let application_name: String = Input::new()
            .with_prompt("please input the application name:")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("application name is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        let mut answers = Answers::new();
        answers.insert(APPLICATION_NAME.to_string(), application_name.trim().to_string());
        Ok(answers)
    }
}

/// Returns answers that were collected before the run started.
#[derive(Debug, Default, Clone)]
pub struct PreloadedPrompter {
    answers: Answers,
}

impl PreloadedPrompter {
    pub fn new(answers: Answers) -> Self {
        Self { answers }
    }

    pub fn with_application_name<S: Into<String>>(name: S) -> Self {
        let mut answers = Answers::new();
        answers.insert(APPLICATION_NAME.to_string(), name.into());
        Self { answers }
    }

    /// Parses a JSON object of string answers, e.g. `{"applicationName": "demo"}`.
    pub fn from_json(input: &str) -> Result<Self> {
        let answers: Answers = serde_json::from_str(input.trim())
            .map_err(|e| Error::PromptError(format!("invalid answers: {e}")))?;
        Ok(Self { answers })
    }

    pub fn from_stdin() -> Result<Self> {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Self::from_json(&buffer)
    }
}

impl Prompter for PreloadedPrompter {
    fn answers(&self) -> Result<Answers> {
        Ok(self.answers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let prompter = PreloadedPrompter::from_json(r#" {"applicationName": "demo"} "#).unwrap();
        let answers = prompter.answers().unwrap();
        assert_eq!(answers.get(APPLICATION_NAME).map(String::as_str), Some("demo"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(PreloadedPrompter::from_json("[1, 2]"), Err(Error::PromptError(_))));
    }
}
