//! Bytecode generation from tokens

use bytecode_system::{BytecodeChunk, Instruction, Opcode};
use core_types::BrickResult;
use tracing::debug;

use crate::brackets::BracketMap;
use crate::error;
use crate::lexer::{Symbol, Token};

/// Bytecode generator that converts tokens to bytecode
///
/// Emits exactly one instruction per token, in token order, so a token index
/// is also the index of its instruction. Bracket operands are the partner's
/// index plus one: the VM resumes right after the partner instruction.
#[derive(Debug, Default)]
pub struct BytecodeGenerator {
    chunk: BytecodeChunk,
}

impl BytecodeGenerator {
    /// Create a new bytecode generator
    pub fn new() -> Self {
        Self {
            chunk: BytecodeChunk::new(),
        }
    }

    /// Generate bytecode from tokens.
    ///
    /// Brackets are resolved first, so unbalanced input fails before any
    /// instruction is emitted.
    pub fn generate(mut self, tokens: &[Token]) -> BrickResult<BytecodeChunk> {
        let brackets = BracketMap::resolve(tokens)?;

        for (i, token) in tokens.iter().enumerate() {
            let opcode = token.symbol.opcode();
            let instruction = match token.symbol {
                Symbol::LoopStart => {
                    let close = brackets
                        .close_for(i)
                        .ok_or_else(|| error::unmatched_open(tokens, i))?;
                    Instruction::with_operand(opcode, jump_operand(close))
                }
                Symbol::LoopEnd => {
                    let open = brackets
                        .open_for(i)
                        .ok_or_else(|| error::unmatched_close(tokens, i))?;
                    Instruction::with_operand(opcode, jump_operand(open))
                }
                _ if token.count == 1 => Instruction::new(opcode),
                _ => Instruction::with_operand(opcode, token.count),
            };
            self.chunk.emit(instruction);
        }
        self.chunk.emit_opcode(Opcode::Halt);

        debug!(
            instructions = self.chunk.instruction_count(),
            loops = brackets.len(),
            "generated bytecode"
        );
        Ok(self.chunk)
    }
}

fn jump_operand(partner: usize) -> u64 {
    partner as u64 + 1
}
