//! Unit tests for Position and ContextWindow

use core_types::{ContextWindow, Position};

#[test]
fn test_position_display() {
    assert_eq!(Position::Token(2).to_string(), "token 2");
    assert_eq!(Position::Byte(10).to_string(), "byte 10");
    assert_eq!(Position::Instruction(5).to_string(), "instruction 5");
}

#[test]
fn test_position_equality() {
    assert_eq!(Position::Token(1), Position::Token(1));
    assert_ne!(Position::Token(1), Position::Instruction(1));
}

#[test]
fn test_context_window_marks_middle() {
    let window = ContextWindow::new(">1+12]1-1", 4, 2);
    assert_eq!(window.render(), "\">1+12]1-1\"\n ~~~~^^");
}

#[test]
fn test_context_window_zero_length_marker_still_visible() {
    let window = ContextWindow::new("", 0, 0);
    assert_eq!(window.render(), "\"\"\n ^");
}
