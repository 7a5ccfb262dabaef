//! Brick compiler component
//!
//! Translates the eight-symbol tape language into run-length-encoded
//! bytecode.
//!
//! # Overview
//!
//! - [`Lexer`] - Folds runs of identical symbols into counted [`Token`]s
//! - [`BracketMap`] - Pairs every `[` with its matching `]`
//! - [`BytecodeGenerator`] - Emits one instruction per token plus a halt
//!
//! # Example
//!
//! ```
//! use compiler::compile;
//!
//! let chunk = compile("+++.").unwrap();
//! assert_eq!(chunk.to_string(), "+3\"!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod brackets;
pub mod bytecode_gen;
pub mod error;
pub mod lexer;

pub use brackets::BracketMap;
pub use bytecode_gen::BytecodeGenerator;
pub use lexer::{Lexer, Symbol, Token};

use bytecode_system::BytecodeChunk;
use core_types::BrickResult;

/// Compile source text into a bytecode chunk.
///
/// # Errors
///
/// * `EmptySource` - the source has zero length
/// * `UnmatchedOpen` / `UnmatchedClose` - brackets are not balanced
pub fn compile(source: &str) -> BrickResult<BytecodeChunk> {
    let tokens = Lexer::new(source).tokenize()?;
    BytecodeGenerator::new().generate(&tokens)
}
