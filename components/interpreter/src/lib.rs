//! Bytecode interpreter for the brick toolchain
//!
//! This crate provides the virtual machine that executes brick bytecode:
//! - Unbounded bidirectional tape of normalized cells
//! - Fetch-decode-execute loop over counted instructions
//! - Lazily checked jump targets
//! - Pluggable character I/O through the [`Console`] trait
//!
//! # Example
//!
//! ```
//! use interpreter::{BufferedConsole, VM};
//! use bytecode_system::BytecodeChunk;
//!
//! let chunk: BytecodeChunk = "+72\"+33\"!".parse().unwrap();
//! let mut vm = VM::new(BufferedConsole::default());
//!
//! vm.execute(&chunk).unwrap();
//! assert_eq!(vm.console().output(), "Hi");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod console;
pub mod context;
pub mod dispatch;
pub mod tape;
pub mod vm;

// Re-export main types at crate root
pub use console::{BufferedConsole, Console, StdConsole};
pub use context::ExecutionContext;
pub use dispatch::Dispatcher;
pub use tape::{Side, Tape};
pub use vm::{ExecutionReport, VM};
