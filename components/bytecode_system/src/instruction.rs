//! Bytecode instruction representation

use std::fmt;

use crate::decoder::ADDRESS_SEPARATOR;
use crate::opcode::Opcode;

/// A single bytecode instruction
///
/// `operand1` is a repeat count, a value, or (for jumps) a target instruction
/// index. `operand2`, when present, names a tape address that replaces the
/// current pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The opcode for this instruction
    pub opcode: Opcode,
    /// Count, value or jump target
    pub operand1: Option<u64>,
    /// Explicit tape address
    pub operand2: Option<u64>,
}

impl Instruction {
    /// Create a new instruction without operands
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            operand1: None,
            operand2: None,
        }
    }

    /// Create a new instruction with operand1
    pub fn with_operand(opcode: Opcode, operand: u64) -> Self {
        Self {
            opcode,
            operand1: Some(operand),
            operand2: None,
        }
    }

    /// Create a new instruction with operand1 and an explicit tape address
    pub fn with_address(opcode: Opcode, operand: u64, address: u64) -> Self {
        Self {
            opcode,
            operand1: Some(operand),
            operand2: Some(address),
        }
    }

    /// operand1, falling back to the opcode default
    pub fn operand(&self) -> Option<u64> {
        self.operand1.or_else(|| self.opcode.default_operand())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        if let Some(operand) = self.operand1 {
            write!(f, "{}", operand)?;
        }
        if let Some(address) = self.operand2 {
            write!(f, "{}{}", char::from(ADDRESS_SEPARATOR), address)?;
        }
        Ok(())
    }
}
