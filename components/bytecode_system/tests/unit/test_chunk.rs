//! Tests for BytecodeChunk struct

use bytecode_system::{BytecodeChunk, Instruction, Opcode};

#[test]
fn test_chunk_creation() {
    let chunk = BytecodeChunk::new();
    assert!(chunk.is_empty());
    assert_eq!(chunk.instruction_count(), 0);
    assert_eq!(chunk.to_bytes(), Vec::<u8>::new());
}

#[test]
fn test_chunk_omits_absent_operands() {
    let mut chunk = BytecodeChunk::new();
    chunk.emit_opcode(Opcode::Add);
    chunk.emit(Instruction::with_operand(Opcode::Add, 1));
    chunk.emit_opcode(Opcode::Halt);
    // An explicit operand of 1 is still written; only absent ones are omitted.
    assert_eq!(chunk.to_string(), "++1!");
}

#[test]
fn test_chunk_text_round_trip_with_hand_authored_opcodes() {
    let text = "&5#72:5\"1:5&-3+2<2-1?!";
    let chunk = BytecodeChunk::from_bytes(text.as_bytes()).unwrap();
    assert_eq!(chunk.instruction_count(), 10);
    assert_eq!(chunk.instructions[0], Instruction::with_operand(Opcode::Seek, 5));
    assert_eq!(chunk.instructions[3], Instruction::new(Opcode::Seek));
    assert_eq!(chunk.instructions[4], Instruction::with_operand(Opcode::Sub, 3));
    assert_eq!(chunk.to_string(), text);
}

#[test]
fn test_chunk_from_instructions() {
    let chunk = BytecodeChunk::from_instructions(vec![
        Instruction::with_operand(Opcode::Add, 3),
        Instruction::new(Opcode::Output),
        Instruction::new(Opcode::Halt),
    ]);
    assert_eq!(chunk.to_string(), "+3\"!");
}
