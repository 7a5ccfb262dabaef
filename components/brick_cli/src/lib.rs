//! Brick command-line library
//!
//! Provides the argument definitions, the [`Runtime`] that drives the
//! compile and run pipelines over files, and the interactive REPL.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod runtime;

pub use cli::{Cli, LogLevel};
pub use error::{CliError, CliResult};
pub use runtime::{Mode, Runtime};
