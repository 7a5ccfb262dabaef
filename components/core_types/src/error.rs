//! Error types for the compiler and virtual machine.
//!
//! Every pipeline stage returns a [`BrickError`] instead of terminating the
//! process. Only the command-line boundary decides how a failure is reported
//! and which exit code it maps to.

use std::fmt;

use crate::{ContextWindow, Position};

/// The kind of fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source unit could not be read
    SourceUnavailable,
    /// The source unit has zero length
    EmptySource,
    /// An open bracket was never closed
    UnmatchedOpen,
    /// A close bracket has no open bracket to pair with
    UnmatchedClose,
    /// A character where an opcode is expected is not an opcode
    InvalidOpcode,
    /// The operand digits following an opcode are malformed
    InvalidSequence,
    /// The instruction cursor points outside the program
    InvalidInstructionIndex,
    /// Execution ran past the last instruction without terminating
    MissingTerminator,
    /// An absolute or jump opcode was executed without its operand
    MissingOperand,
    /// The input collaborator did not supply exactly one character
    InvalidInputCharacter,
    /// Pointer arithmetic left the addressable range
    AddressOutOfRange,
    /// The output collaborator rejected a character
    OutputFailure,
}

impl ErrorKind {
    /// Diagnostic label used when reporting this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::SourceUnavailable => "SourceUnavailable",
            ErrorKind::EmptySource => "EmptySource",
            ErrorKind::UnmatchedOpen => "UnmatchedOpen",
            ErrorKind::UnmatchedClose => "UnmatchedClose",
            ErrorKind::InvalidOpcode => "InvalidOpcode",
            ErrorKind::InvalidSequence => "InvalidSequence",
            ErrorKind::InvalidInstructionIndex => "InvalidInstructionIndex",
            ErrorKind::MissingTerminator => "MissingTerminator",
            ErrorKind::MissingOperand => "MissingOperand",
            ErrorKind::InvalidInputCharacter => "InvalidInputCharacter",
            ErrorKind::AddressOutOfRange => "AddressOutOfRange",
            ErrorKind::OutputFailure => "OutputFailure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fatal condition raised by one pipeline stage.
///
/// Carries the error kind, a human-readable message and enough positional
/// context to locate the fault.
///
/// # Examples
///
/// ```
/// use core_types::{BrickError, ErrorKind, Position};
///
/// let error = BrickError::new(ErrorKind::InvalidInstructionIndex, "no instruction at 12")
///     .at(Position::Instruction(12));
///
/// assert_eq!(error.position, Some(Position::Instruction(12)));
/// assert_eq!(error.to_string(), "InvalidInstructionIndex |> no instruction at 12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} |> {message}")]
pub struct BrickError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Where the error occurred, if known
    pub position: Option<Position>,
    /// Surrounding text with the fault marked
    pub context: Option<ContextWindow>,
}

impl BrickError {
    /// Create an error without positional information.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
            context: None,
        }
    }

    /// Attach a position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a context window.
    pub fn with_context(mut self, context: ContextWindow) -> Self {
        self.context = Some(context);
        self
    }

    /// Full diagnostic text: the headline followed by the context window.
    pub fn render(&self) -> String {
        match &self.context {
            Some(context) => format!("{}\n{}", self, context.render()),
            None => self.to_string(),
        }
    }
}

/// Result alias used throughout the toolchain.
pub type BrickResult<T> = Result<T, BrickError>;
