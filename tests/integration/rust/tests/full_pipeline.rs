//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Lexer -> BracketMap ->
//! BytecodeGenerator -> bytecode text -> Decoder -> VM -> output

use bytecode_system::BytecodeChunk;
use compiler::compile;
use core_types::{Cell, ErrorKind};
use integration_tests::interpret_source;
use interpreter::{BufferedConsole, Tape, VM};

const HELLO: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

/// Helper function to compile, re-parse and execute source text
fn execute(source: &str, input: &str) -> (VM<BufferedConsole>, String) {
    let compiled = compile(source).expect("compiles");
    let chunk = BytecodeChunk::from_bytes(&compiled.to_bytes()).expect("parses");
    let mut vm = VM::new(BufferedConsole::new(input));
    vm.execute(&chunk).expect("runs");
    let output = vm.console().output().to_string();
    (vm, output)
}

#[test]
fn test_hello_world() {
    let (_, output) = execute(HELLO, "");
    assert_eq!(output, "Hello World!\n");
}

#[test]
fn test_matches_reference_interpretation() {
    let programs = [
        (HELLO, ""),
        (",[.,]", "echo\0"),
        ("-.-.", ""),
        ("<<+++[>+++<-]>.", ""),
        (",>,<[->+<]>.", "!!"),
    ];
    for (source, input) in programs {
        let (_, output) = execute(source, input);
        assert_eq!(output, interpret_source(source, input), "source {source:?}");
    }
}

#[test]
fn test_scenario_three_emits_ordinal_three() {
    let (_, output) = execute("+++.", "");
    assert_eq!(output.chars().collect::<Vec<_>>(), vec!['\u{3}']);
}

#[test]
fn test_scenario_clear_loop_on_zero_skips_body() {
    let chunk = compile("[-]").unwrap();
    let mut vm = VM::new(BufferedConsole::default());
    let report = vm.execute(&chunk).unwrap();
    // `$` jumps to `!`; the subtract never runs
    assert_eq!(report.steps, 2);
    assert!(vm.tape().peek(0).is_zero());
}

#[test]
fn test_scenario_clear_loop_on_five() {
    let chunk = compile("[-]").unwrap();
    let mut tape = Tape::new();
    tape.set(0, Cell::new(5)).unwrap();

    let mut vm = VM::new(BufferedConsole::default());
    let report = vm.execute_with_tape(&chunk, tape).unwrap();
    // 5 passes of `-` and `@`; zero is the fixed point of repeated
    // subtraction from 5 under the 255 rule
    assert_eq!(vm.tape().peek(0).value(), 0);
    assert_eq!(report.steps, 1 + 5 * 2 + 1);
}

#[test]
fn test_modulus_literals() {
    let (vm, _) = execute(&"+".repeat(256), "");
    assert_eq!(vm.tape().peek(0).value(), 1);

    let (vm, _) = execute("-", "");
    assert_eq!(vm.tape().peek(0).value(), 254);
}

#[test]
fn test_tape_disjointness() {
    let (vm, _) = execute("<+++++>++", "");
    assert_eq!(vm.tape().peek(-1).value(), 5);
    assert_eq!(vm.tape().peek(0).value(), 2);
}

#[test]
fn test_multi_repeat_input_keeps_last_read() {
    let (vm, output) = execute(",,,.", "xyz");
    assert_eq!(output, "z");
    assert_eq!(vm.console().remaining_input(), 0);
}

#[test]
fn test_input_exhausted() {
    let chunk = compile(",.").unwrap();
    let mut vm = VM::new(BufferedConsole::default());
    let err = vm.execute(&chunk).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInputCharacter);
}
