//! Positional context for diagnostics.
//!
//! Compile-time faults are located by token index, bytecode faults by byte
//! offset, and run-time faults by instruction index.

use std::fmt;

/// Where in the pipeline input a fault occurred.
///
/// # Examples
///
/// ```
/// use core_types::Position;
///
/// let pos = Position::Token(3);
/// assert_eq!(pos.to_string(), "token 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Index into the compiler's token sequence
    Token(usize),
    /// Byte offset into a bytecode blob
    Byte(usize),
    /// Index into the parsed instruction sequence
    Instruction(usize),
}

impl Position {
    /// The raw index regardless of which sequence it refers to.
    pub fn index(&self) -> usize {
        match *self {
            Position::Token(i) | Position::Byte(i) | Position::Instruction(i) => i,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Token(i) => write!(f, "token {}", i),
            Position::Byte(i) => write!(f, "byte {}", i),
            Position::Instruction(i) => write!(f, "instruction {}", i),
        }
    }
}

/// A short excerpt of neighbouring text with the faulty part marked.
///
/// Rendered as the quoted excerpt on one line and, on the next, a marker
/// line where `~` pads up to the fault and `^` underlines it.
///
/// # Examples
///
/// ```
/// use core_types::ContextWindow;
///
/// let window = ContextWindow::new("+3>1[1", 4, 2);
/// assert_eq!(window.render(), "\"+3>1[1\"\n ~~~~^^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    /// The excerpt text
    pub text: String,
    /// Character offset of the fault inside `text`
    pub marker_start: usize,
    /// Number of characters to underline
    pub marker_len: usize,
}

impl ContextWindow {
    /// Create a context window.
    pub fn new(text: impl Into<String>, marker_start: usize, marker_len: usize) -> Self {
        Self {
            text: text.into(),
            marker_start,
            marker_len,
        }
    }

    /// Two-line rendering: quoted excerpt and marker line.
    pub fn render(&self) -> String {
        format!(
            "\"{}\"\n {}{}",
            self.text,
            "~".repeat(self.marker_start),
            "^".repeat(self.marker_len.max(1))
        )
    }
}
