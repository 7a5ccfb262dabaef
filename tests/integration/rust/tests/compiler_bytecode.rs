//! Compiler -> bytecode text -> Bytecode Parser integration tests
//!
//! The compiler and the VM only meet through the textual bytecode, so
//! everything the compiler emits must survive the text encoding.

use bytecode_system::{BytecodeChunk, Opcode};
use compiler::compile;
use core_types::{ErrorKind, Position};

fn reparse(source: &str) -> (BytecodeChunk, BytecodeChunk) {
    let compiled = compile(source).expect("compiles");
    let parsed = BytecodeChunk::from_bytes(&compiled.to_bytes()).expect("parses");
    (compiled, parsed)
}

#[test]
fn test_text_encoding_is_lossless() {
    for source in ["+++.", "[-]", "++[>[-]<]", ",[.,]", "+a+ b+\n.", "<<<+++>>>---"] {
        let (compiled, parsed) = reparse(source);
        assert_eq!(compiled, parsed, "source {source:?}");
    }
}

#[test]
fn test_scenario_add_three_then_output() {
    let (_, chunk) = reparse("+++.");
    assert_eq!(chunk.instruction_count(), 3);

    let add = chunk.get(0).unwrap();
    assert_eq!(add.opcode, Opcode::Add);
    assert_eq!(add.operand(), Some(3));
    assert_eq!(chunk.get(1).unwrap().opcode, Opcode::Output);
    assert_eq!(chunk.get(2).unwrap().opcode, Opcode::Halt);
}

#[test]
fn test_jump_operands_point_past_partner() {
    let (_, chunk) = reparse("[-]");
    assert_eq!(chunk.to_string(), "$3-@1!");
    // `[` resumes after `]`, `]` resumes after `[`
    assert_eq!(chunk.get(0).unwrap().operand1, Some(3));
    assert_eq!(chunk.get(2).unwrap().operand1, Some(1));
}

#[test]
fn test_comment_only_source_is_just_halt() {
    let (_, chunk) = reparse("this has no commands");
    assert_eq!(chunk.to_string(), "!");
}

#[test]
fn test_lone_close_fails_before_emission() {
    let err = compile("]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnmatchedClose);
    assert_eq!(err.position, Some(Position::Token(0)));
}

#[test]
fn test_lone_open_fails_before_emission() {
    let err = compile("+[").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnmatchedOpen);
    assert_eq!(err.position, Some(Position::Token(1)));
}

#[test]
fn test_empty_source() {
    assert_eq!(compile("").unwrap_err().kind, ErrorKind::EmptySource);
}
