//! Terminal interaction, kept behind a seam.
//!
//! Secret upserts need a confirmation prompt and a hidden value prompt; the
//! manager only sees this trait, so the upsert logic is testable without a
//! terminal.

use crate::github::error::{GitHubError, GitHubResult};
use dialoguer::{Confirm, Password};

/// Prompting surface the repository manager depends on.
pub trait Interaction: Send + Sync {
    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> GitHubResult<bool>;

    /// Ask for a secret value with input suppressed from display.
    fn secret_value(&self, name: &str) -> GitHubResult<String>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Interaction for Terminal {
    fn confirm(&self, prompt: &str) -> GitHubResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| GitHubError::Interaction(e.to_string()))
    }

    fn secret_value(&self, name: &str) -> GitHubResult<String> {
        Password::new()
            .with_prompt(name)
            .interact()
            .map_err(|e| GitHubError::Interaction(e.to_string()))
    }
}
