//! Error types for command line parsing.

use thiserror::Error;

/// Reasons a line of chat text cannot be dispatched.
///
/// The display text is the reason line sent back to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Input was empty or did not begin with `/`.
    #[error("command must start with /")]
    MissingLeadingSlash,

    /// No alphanumeric command name followed the slash.
    #[error("command cannot be empty")]
    EmptyCommand,

    /// The command name is not in the command table.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
