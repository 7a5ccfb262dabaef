//! Bytecode opcodes for the brick virtual machine
//!
//! Each opcode is encoded as a single ASCII character.

use std::fmt;

/// Bytecode opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `&` - set the pointer to an absolute address
    Seek,
    /// `#` - store a value into a cell
    Load,
    /// `+` - add to a cell
    Add,
    /// `-` - subtract from a cell
    Sub,
    /// `?` - read characters into the current cell
    Input,
    /// `"` - write the character held by a cell
    Output,
    /// `@` - jump when the current cell is non-zero
    JumpIfNonZero,
    /// `!` - stop execution
    Halt,
    /// `>` - move the pointer forward
    MoveRight,
    /// `<` - move the pointer backward
    MoveLeft,
    /// `$` - jump when the current cell is zero
    JumpIfZero,
}

impl Opcode {
    /// All opcodes, in the order of the bytecode alphabet.
    pub const ALL: [Opcode; 11] = [
        Opcode::Seek,
        Opcode::Load,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Input,
        Opcode::Output,
        Opcode::JumpIfNonZero,
        Opcode::Halt,
        Opcode::MoveRight,
        Opcode::MoveLeft,
        Opcode::JumpIfZero,
    ];

    /// Decode an opcode character.
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        let opcode = match byte {
            b'&' => Opcode::Seek,
            b'#' => Opcode::Load,
            b'+' => Opcode::Add,
            b'-' => Opcode::Sub,
            b'?' => Opcode::Input,
            b'"' => Opcode::Output,
            b'@' => Opcode::JumpIfNonZero,
            b'!' => Opcode::Halt,
            b'>' => Opcode::MoveRight,
            b'<' => Opcode::MoveLeft,
            b'$' => Opcode::JumpIfZero,
            _ => return None,
        };
        Some(opcode)
    }

    /// The character this opcode is encoded as.
    pub fn as_byte(&self) -> u8 {
        match self {
            Opcode::Seek => b'&',
            Opcode::Load => b'#',
            Opcode::Add => b'+',
            Opcode::Sub => b'-',
            Opcode::Input => b'?',
            Opcode::Output => b'"',
            Opcode::JumpIfNonZero => b'@',
            Opcode::Halt => b'!',
            Opcode::MoveRight => b'>',
            Opcode::MoveLeft => b'<',
            Opcode::JumpIfZero => b'$',
        }
    }

    /// Operand value used when operand1 is absent.
    ///
    /// Counted opcodes repeat once by default. Absolute addressing and jumps
    /// have no default and need an explicit operand.
    pub fn default_operand(&self) -> Option<u64> {
        match self {
            Opcode::Seek | Opcode::Load | Opcode::JumpIfZero | Opcode::JumpIfNonZero => None,
            Opcode::Add
            | Opcode::Sub
            | Opcode::Input
            | Opcode::Output
            | Opcode::MoveRight
            | Opcode::MoveLeft
            | Opcode::Halt => Some(1),
        }
    }

    /// Check if operand2 overrides the current pointer for this opcode
    pub fn accepts_address(&self) -> bool {
        matches!(
            self,
            Opcode::Load | Opcode::Add | Opcode::Sub | Opcode::Output
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}
