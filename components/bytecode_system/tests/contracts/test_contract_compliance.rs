//! The bytecode alphabet and encoding are a contract between two programs
//! that never share memory; these tests pin it down.

use bytecode_system::{BytecodeChunk, Instruction, Opcode};

#[test]
fn test_contract_opcode_characters() {
    let expected = [
        (Opcode::Seek, '&'),
        (Opcode::Load, '#'),
        (Opcode::Add, '+'),
        (Opcode::Sub, '-'),
        (Opcode::Input, '?'),
        (Opcode::Output, '"'),
        (Opcode::JumpIfNonZero, '@'),
        (Opcode::Halt, '!'),
        (Opcode::MoveRight, '>'),
        (Opcode::MoveLeft, '<'),
        (Opcode::JumpIfZero, '$'),
    ];
    for (opcode, ch) in expected {
        assert_eq!(opcode.as_byte() as char, ch);
    }
}

#[test]
fn test_contract_single_byte_per_character() {
    let chunk = BytecodeChunk::from_instructions(vec![
        Instruction::with_operand(Opcode::Add, 72),
        Instruction::new(Opcode::Output),
        Instruction::new(Opcode::Halt),
    ]);
    let bytes = chunk.to_bytes();
    assert_eq!(bytes.len(), chunk.to_string().chars().count());
    assert!(bytes.is_ascii());
}

#[test]
fn test_contract_encoding_is_symmetric() {
    let text = "+8$30>+4$16>+2>+3>+3>+<4-@5>+>+>->2+$27<@25<-@2>2\">-3\"+7\"\"+3\">2\"<-\"<\"+3\"-6\"-8\">2+\">+2\"!";
    let chunk = BytecodeChunk::from_bytes(text.as_bytes()).unwrap();
    assert_eq!(chunk.to_bytes(), text.as_bytes());
}
