//! Core value types and error handling shared by the brick toolchain.
//!
//! This crate provides the foundational types used by both the compiler and
//! the virtual machine, including the normalized tape cell, the error
//! taxonomy and positional context for diagnostics.
//!
//! # Overview
//!
//! - [`Cell`] - One normalized storage unit on the tape
//! - [`BrickError`] - A fatal condition with positional context
//! - [`ErrorKind`] - Classification of fatal conditions
//! - [`Position`] - Where in the pipeline input an error occurred
//! - [`ContextWindow`] - Neighbouring text with the fault underlined
//!
//! # Examples
//!
//! ```
//! use core_types::{BrickError, Cell, ErrorKind, Position};
//!
//! // Cell arithmetic follows the 255 normalization rule
//! let cell = Cell::new(255).add(1);
//! assert_eq!(cell.value(), 1);
//!
//! // Create an error
//! let error = BrickError::new(ErrorKind::InvalidOpcode, "'x' is not a valid opcode")
//!     .at(Position::Byte(4));
//! assert_eq!(error.kind, ErrorKind::InvalidOpcode);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod cell;
mod error;
mod source;

pub use cell::Cell;
pub use error::{BrickError, BrickResult, ErrorKind};
pub use source::{ContextWindow, Position};
