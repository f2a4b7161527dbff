//! Per-invocation command context

use indicatif::ProgressBar;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::ui::{create_spinner, Prompter};

/// Everything a handler needs for one invocation
///
/// Built at dispatch time and dropped when the command returns.
pub struct CommandContext<'a, A> {
    /// API client handle
    pub api: &'a A,
    /// Output mode (table or structured)
    pub output: OutputFormat,
    /// Batch mode suppresses spinners
    pub batch: bool,
    /// Confirmation and input prompts
    pub prompter: &'a dyn Prompter,
    /// Destination of command output
    pub out: &'a mut dyn Write,
}

impl<'a, A> CommandContext<'a, A> {
    pub fn new(
        api: &'a A,
        output: OutputFormat,
        batch: bool,
        prompter: &'a dyn Prompter,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            api,
            output,
            batch,
            prompter,
            out,
        }
    }

    /// Whether the output mode is machine-readable
    pub fn structured(&self) -> bool {
        self.output.is_structured()
    }

    /// Spinner on stderr unless in batch mode
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        create_spinner(message, self.batch)
    }
}
