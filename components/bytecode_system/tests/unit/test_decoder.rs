//! Tests for the bytecode decoder

use bytecode_system::{Decoder, Instruction, Opcode};
use core_types::{ErrorKind, Position};

#[test]
fn test_decode_compiler_output() {
    // `[-]` compiled
    let insts = Decoder::new(b"$3-@1!").decode().unwrap();
    assert_eq!(
        insts,
        vec![
            Instruction::with_operand(Opcode::JumpIfZero, 3),
            Instruction::new(Opcode::Sub),
            Instruction::with_operand(Opcode::JumpIfNonZero, 1),
            Instruction::new(Opcode::Halt),
        ]
    );
}

#[test]
fn test_decode_maximal_digit_run() {
    let insts = Decoder::new(b"+1234567890!").decode().unwrap();
    assert_eq!(insts[0].operand1, Some(1_234_567_890));
}

#[test]
fn test_decode_zero_operand() {
    let insts = Decoder::new(b"&0!").decode().unwrap();
    assert_eq!(insts[0], Instruction::with_operand(Opcode::Seek, 0));
}

#[test]
fn test_decode_does_not_require_terminator() {
    let insts = Decoder::new(b"+>+").decode().unwrap();
    assert_eq!(insts.len(), 3);
}

#[test]
fn test_invalid_opcode_reports_offset_and_context() {
    let err = Decoder::new(b"+2>3.<!").decode().unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidOpcode);
    assert_eq!(err.position, Some(Position::Byte(4)));
    let context = err.context.unwrap();
    assert_eq!(context.text, "+2>3.<!");
    assert_eq!(context.marker_start, 4);
}

#[test]
fn test_invalid_sequence_names_opcode() {
    let err = Decoder::new(b"++7:").decode().unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidSequence);
    assert_eq!(err.position, Some(Position::Byte(1)));
    assert!(err.message.contains("'+'"));
}
