//! CLI error types.

use thiserror::Error;

/// Errors surfaced by CLI commands.
///
/// The library layers below have no recoverable errors; everything here is
/// an input or I/O problem at the shell boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input lines or writing output failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// An argument was syntactically valid but semantically unusable.
    #[error("invalid value for '{name}': {reason}")]
    InvalidArgument {
        /// Argument name as spelled on the command line.
        name: &'static str,
        /// Description of why the value was rejected.
        reason: String,
    },
}

/// Convenience alias used by every command.
pub type Result<T> = std::result::Result<T, CliError>;
