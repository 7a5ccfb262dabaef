//! Execution context for VM

use bytecode_system::{BytecodeChunk, Instruction};
use core_types::{BrickError, BrickResult, ErrorKind, Position};

/// Execution context for a bytecode chunk
///
/// Holds the instruction cursor and the bytecode itself. Jump targets are not
/// validated up front; a bad target surfaces only when the cursor is
/// dereferenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Index of the next instruction to fetch
    pub instruction_pointer: usize,
    /// The bytecode being executed
    pub bytecode: BytecodeChunk,
    /// Whether the last instruction moved the cursor by jumping
    jumped: bool,
    /// Number of instructions fetched so far
    steps: u64,
}

impl ExecutionContext {
    /// Create a new execution context for a bytecode chunk
    pub fn new(bytecode: BytecodeChunk) -> Self {
        Self {
            instruction_pointer: 0,
            bytecode,
            jumped: false,
            steps: 0,
        }
    }

    /// Return the current instruction and its index, then advance.
    ///
    /// # Errors
    ///
    /// * `InvalidInstructionIndex` - a jump sent the cursor outside the program
    /// * `MissingTerminator` - execution ran off the end without halting
    pub fn fetch(&mut self) -> BrickResult<(usize, Instruction)> {
        let index = self.instruction_pointer;
        match self.bytecode.get(index) {
            Some(inst) => {
                let inst = *inst;
                self.instruction_pointer += 1;
                self.jumped = false;
                self.steps += 1;
                Ok((index, inst))
            }
            None if self.jumped => Err(BrickError::new(
                ErrorKind::InvalidInstructionIndex,
                format!(
                    "there is no instruction in position {} (program has {})",
                    index,
                    self.bytecode.instruction_count()
                ),
            )
            .at(Position::Instruction(index))),
            None => Err(BrickError::new(
                ErrorKind::MissingTerminator,
                format!(
                    "reached position {} without a halt instruction. Maybe terminate the program?",
                    index
                ),
            )
            .at(Position::Instruction(index))),
        }
    }

    /// Continue execution at instruction `target`
    pub fn jump(&mut self, target: usize) {
        self.instruction_pointer = target;
        self.jumped = true;
    }

    /// Number of instructions fetched so far
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
