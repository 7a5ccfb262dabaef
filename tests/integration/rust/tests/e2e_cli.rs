//! End-to-End CLI Integration Tests
//!
//! Tests the toolchain through the brick_cli Runtime API, from source file
//! to program output.

use std::fs;

use brick_cli::{CliError, Mode, Runtime};
use core_types::ErrorKind;
use interpreter::BufferedConsole;
use tempfile::TempDir;

#[test]
fn test_e2e_compile_then_run_separately() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("abc.bf");
    fs::write(&source, "+++++++++++++[>+++++<-]>.+.+.").unwrap();

    let runtime = Runtime::new();
    runtime.dispatch(Mode::Compile, &source).unwrap();

    let bytecode = dir.path().join("abc.bkb");
    let (_, console) = runtime
        .run_file_with(&bytecode, BufferedConsole::default())
        .unwrap();
    assert_eq!(console.output(), "ABC");
}

#[test]
fn test_e2e_hand_written_bytecode() {
    let dir = TempDir::new().unwrap();
    let bytecode = dir.path().join("ok.bkb");
    fs::write(&bytecode, "#79:1 #75:2\n\"1:1 \"1:2\n!\n").unwrap();

    let (report, console) = Runtime::new()
        .run_file_with(&bytecode, BufferedConsole::default())
        .unwrap();
    assert_eq!(console.output(), "OK");
    assert_eq!(report.pointer, 0);
}

#[test]
fn test_e2e_bytecode_without_terminator() {
    let dir = TempDir::new().unwrap();
    let bytecode = dir.path().join("open.bkb");
    fs::write(&bytecode, "+65\"").unwrap();

    match Runtime::new()
        .run_file_with(&bytecode, BufferedConsole::default())
        .unwrap_err()
    {
        CliError::Brick(e) => assert_eq!(e.kind, ErrorKind::MissingTerminator),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_e2e_unbalanced_source_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("open.bf");
    fs::write(&source, "+[>+").unwrap();

    let err = Runtime::new()
        .compile_and_run_with(&source, BufferedConsole::default())
        .unwrap_err();
    assert!(err.diagnostic().starts_with("UnmatchedOpen |>"));
    assert!(!dir.path().join("open.bkb").exists());
}

#[test]
fn test_e2e_run_missing_bytecode() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nothing.bkb");

    let err = Runtime::new().dispatch(Mode::Run, &missing).unwrap_err();
    match err {
        CliError::Brick(e) => assert_eq!(e.kind, ErrorKind::SourceUnavailable),
        other => panic!("unexpected error: {other:?}"),
    }
}
