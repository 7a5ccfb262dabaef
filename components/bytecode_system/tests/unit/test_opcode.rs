//! Tests for Opcode enum

use bytecode_system::Opcode;

#[test]
fn test_alphabet_characters() {
    let alphabet: String = Opcode::ALL.iter().map(|op| op.as_byte() as char).collect();
    assert_eq!(alphabet, "&#+-?\"@!><$");
}

#[test]
fn test_opcodes_without_default_operand() {
    let required: Vec<Opcode> = Opcode::ALL
        .into_iter()
        .filter(|op| op.default_operand().is_none())
        .collect();
    assert_eq!(
        required,
        vec![Opcode::Seek, Opcode::Load, Opcode::JumpIfNonZero, Opcode::JumpIfZero]
    );
}

#[test]
fn test_address_operand_opcodes() {
    assert!(Opcode::Load.accepts_address());
    assert!(Opcode::Add.accepts_address());
    assert!(Opcode::Sub.accepts_address());
    assert!(Opcode::Output.accepts_address());
    assert!(!Opcode::Input.accepts_address());
    assert!(!Opcode::Seek.accepts_address());
    assert!(!Opcode::MoveRight.accepts_address());
}

#[test]
fn test_opcode_display() {
    assert_eq!(Opcode::Output.to_string(), "\"");
    assert_eq!(Opcode::Seek.to_string(), "&");
}
