//! Interactive prompts (confirmation and text input)

use dialoguer::{Confirm, Input};
use log::warn;

use crate::error::{FlyError, Result};

/// Source of user decisions for commands that need them
pub trait Prompter {
    /// Ask a yes/no question; `false` means the user declined
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Ask for a free-text value
    fn input(&self, message: &str) -> Result<String>;
}

/// Prompter backed by the terminal
///
/// In batch mode nothing is asked: confirmations are declined and
/// text input fails with a usage error.
pub struct TerminalPrompter {
    batch: bool,
}

impl TerminalPrompter {
    pub fn new(batch: bool) -> Self {
        Self { batch }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        if self.batch {
            warn!("Declining '{}' in batch mode (use --yes to proceed)", message);
            return Ok(false);
        }

        Ok(Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?)
    }

    fn input(&self, message: &str) -> Result<String> {
        if self.batch {
            return Err(FlyError::Usage(format!(
                "{} is required in batch mode",
                message
            )));
        }

        let value: String = Input::new().with_prompt(message).interact_text()?;
        Ok(value)
    }
}
