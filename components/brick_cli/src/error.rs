//! Error types for the CLI

use std::path::PathBuf;

use core_types::BrickError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Compilation or execution failure
    #[error(transparent)]
    Brick(#[from] BrickError),

    /// A bytecode file could not be written
    #[error("could not write '{}': {source}", .path.display())]
    Io {
        /// File being written
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// The file does not carry the extension the mode requires
    #[error("'{}' is not a valid {expected} file", .path.display())]
    InvalidExtension {
        /// Offending path
        path: PathBuf,
        /// Accepted extension(s)
        expected: &'static str,
    },

    /// REPL error
    #[error("{0}")]
    Repl(String),
}

impl CliError {
    /// Diagnostic text printed to stderr before exiting.
    pub fn diagnostic(&self) -> String {
        match self {
            CliError::Brick(e) => e.render(),
            CliError::Io { .. } => format!("FileWritingError |> {}", self),
            CliError::InvalidExtension { .. } => format!("FileOpeningError |> {}", self),
            CliError::Repl(_) => format!("ReplError |> {}", self),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
