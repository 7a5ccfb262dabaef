//! Bytecode parser
//!
//! Turns a textual bytecode blob back into instructions. The grammar is
//!
//! ```text
//! program     := (ws* instruction)* ws*
//! instruction := opcode digits? (':' digits)?
//! ```
//!
//! where `opcode` is one of the eleven opcode characters and `digits` is a
//! maximal run of ASCII decimal digits. The decoder accepts every opcode,
//! including the absolute ones the compiler never emits.

use core_types::{BrickError, BrickResult, ContextWindow, ErrorKind, Position};
use tracing::debug;

use crate::instruction::Instruction;
use crate::opcode::Opcode;

/// Separator between operand1 and operand2.
pub const ADDRESS_SEPARATOR: u8 = b':';

/// Bytes shown on either side of a fault.
const WINDOW_RADIUS: usize = 6;

/// Left-to-right scanner over a bytecode blob.
#[derive(Debug)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Decode the whole blob.
    ///
    /// # Errors
    ///
    /// * `InvalidOpcode` - a character where an opcode is expected is not one
    /// * `InvalidSequence` - the operands after an opcode are malformed
    pub fn decode(mut self) -> BrickResult<Vec<Instruction>> {
        let mut instructions = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(byte) = self.peek() else {
                break;
            };
            let start = self.offset;
            let opcode = Opcode::from_byte(byte).ok_or_else(|| self.invalid_opcode(byte))?;
            self.offset += 1;
            instructions.push(self.instruction(opcode, start)?);
        }

        debug!(
            instructions = instructions.len(),
            bytes = self.bytes.len(),
            "decoded bytecode"
        );
        Ok(instructions)
    }

    fn instruction(&mut self, opcode: Opcode, start: usize) -> BrickResult<Instruction> {
        let operand1 = if self.peek_digit() {
            Some(self.digits(opcode, start)?)
        } else {
            None
        };

        let operand2 = if self.peek() == Some(ADDRESS_SEPARATOR) {
            if operand1.is_none() {
                return Err(self.invalid_sequence(opcode, start, "address given without a value"));
            }
            self.offset += 1;
            if !self.peek_digit() {
                return Err(self.invalid_sequence(opcode, start, "expected digits after ':'"));
            }
            Some(self.digits(opcode, start)?)
        } else {
            None
        };

        if self.peek() == Some(ADDRESS_SEPARATOR) {
            return Err(self.invalid_sequence(opcode, start, "too many operands"));
        }

        Ok(Instruction {
            opcode,
            operand1,
            operand2,
        })
    }

    /// Parse a maximal digit run.
    fn digits(&mut self, opcode: Opcode, start: usize) -> BrickResult<u64> {
        let mut value: u64 = 0;
        while let Some(byte) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                .ok_or_else(|| self.invalid_sequence(opcode, start, "operand is too large"))?;
            self.offset += 1;
        }
        Ok(value)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.offset += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    fn peek_digit(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_digit())
    }

    fn invalid_opcode(&self, byte: u8) -> BrickError {
        let shown = if byte.is_ascii_graphic() {
            format!("'{}'", byte as char)
        } else {
            format!("byte 0x{:02x}", byte)
        };
        BrickError::new(
            ErrorKind::InvalidOpcode,
            format!("{} is not a valid opcode (char num: {})", shown, self.offset),
        )
        .at(Position::Byte(self.offset))
        .with_context(self.window(self.offset, 1))
    }

    fn invalid_sequence(&self, opcode: Opcode, start: usize, reason: &str) -> BrickError {
        BrickError::new(
            ErrorKind::InvalidSequence,
            format!(
                "invalid sequence of characters for instruction '{}' at char num {}: {}",
                opcode, start, reason
            ),
        )
        .at(Position::Byte(start))
        .with_context(self.window(start, self.offset.saturating_sub(start).max(1)))
    }

    fn window(&self, at: usize, len: usize) -> ContextWindow {
        let from = at.saturating_sub(WINDOW_RADIUS);
        let to = (at + len + WINDOW_RADIUS).min(self.bytes.len());
        let text: String = self.bytes[from..to]
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        ContextWindow::new(text, at - from, len)
    }
}
