//! Bytecode chunk - compiled bytecode container
//!
//! Holds the instruction sequence and converts it to and from the textual
//! bytecode format (one ASCII byte per character).

use std::fmt;
use std::str::FromStr;

use core_types::BrickError;

use crate::decoder::Decoder;
use crate::instruction::Instruction;
use crate::opcode::Opcode;

/// A compiled bytecode chunk
///
/// Instructions are addressed by their index. Jump operands refer to these
/// indices, so the order of instructions must never change once emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytecodeChunk {
    /// Sequence of bytecode instructions
    pub instructions: Vec<Instruction>,
}

impl BytecodeChunk {
    /// Create a new empty bytecode chunk
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Create a chunk from an existing instruction sequence
    pub fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Emit an instruction and return its index
    pub fn emit(&mut self, instruction: Instruction) -> usize {
        let idx = self.instructions.len();
        self.instructions.push(instruction);
        idx
    }

    /// Emit an operand-less instruction and return its index
    pub fn emit_opcode(&mut self, opcode: Opcode) -> usize {
        self.emit(Instruction::new(opcode))
    }

    /// Get the instruction at `index`
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Get the number of instructions
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Check whether the chunk has no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Serialize chunk to the textual bytecode format
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Deserialize chunk from the textual bytecode format
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BrickError> {
        let instructions = Decoder::new(bytes).decode()?;
        Ok(Self { instructions })
    }
}

impl fmt::Display for BytecodeChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.instructions {
            write!(f, "{}", inst)?;
        }
        Ok(())
    }
}

impl FromStr for BytecodeChunk {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}
