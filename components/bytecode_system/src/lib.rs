//! Bytecode system for the brick toolchain
//!
//! This crate provides the instruction set shared by the compiler and the
//! virtual machine, together with its textual encoding.
//!
//! # Features
//!
//! - Eleven single-character opcodes
//! - Run-length counted instructions (`+3` adds three)
//! - Optional explicit tape address operand (`#65:3`)
//! - Text encoding and a validating decoder for hand-authored bytecode
//!
//! # Example
//!
//! ```
//! use bytecode_system::{BytecodeChunk, Instruction, Opcode};
//!
//! let mut chunk = BytecodeChunk::new();
//!
//! // Emit instructions
//! chunk.emit(Instruction::with_operand(Opcode::Add, 3));
//! chunk.emit(Instruction::new(Opcode::Output));
//! chunk.emit(Instruction::new(Opcode::Halt));
//!
//! // Serialize
//! let bytes = chunk.to_bytes();
//! assert_eq!(bytes, b"+3\"!");
//!
//! let restored = BytecodeChunk::from_bytes(&bytes).unwrap();
//! assert_eq!(restored, chunk);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod decoder;
pub mod instruction;
pub mod opcode;

// Re-export main types at crate root
pub use chunk::BytecodeChunk;
pub use decoder::Decoder;
pub use instruction::Instruction;
pub use opcode::Opcode;
