//! # Command Plumbing
//!
//! Every command returns a [`CommandResult`]: the text to print and the
//! process exit code. Failures are converted to user-visible notices at
//! this boundary; nothing propagates further up.

pub mod cart;
pub mod checkout;
pub mod list;

/// Outcome of one CLI command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    /// Normal output, exit 0.
    pub fn success(output: impl Into<String>) -> Self {
        CommandResult {
            exit_code: 0,
            output: output.into(),
        }
    }

    /// A blocking notice: the requested action did not happen. Exit 1 so
    /// scripts can tell, but the message is for a person, not a parser.
    pub fn notice(output: impl Into<String>) -> Self {
        CommandResult {
            exit_code: 1,
            output: output.into(),
        }
    }
}
