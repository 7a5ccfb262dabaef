//! Compiler error types and helpers

use core_types::{BrickError, ContextWindow, ErrorKind, Position};

use crate::lexer::Token;

/// Tokens shown on either side of a bracket fault.
const CONTEXT_TOKENS: usize = 3;

/// Create an empty source error
pub fn empty_source() -> BrickError {
    BrickError::new(
        ErrorKind::EmptySource,
        "end of file reached while reading the source. Is the file empty?",
    )
}

/// Create an error for a `]` with no matching `[`
pub fn unmatched_close(tokens: &[Token], index: usize) -> BrickError {
    BrickError::new(ErrorKind::UnmatchedClose, "']' closed without opening")
        .at(Position::Token(index))
        .with_context(token_window(tokens, index))
}

/// Create an error for a `[` that is never closed
pub fn unmatched_open(tokens: &[Token], index: usize) -> BrickError {
    BrickError::new(ErrorKind::UnmatchedOpen, "'[' not closed")
        .at(Position::Token(index))
        .with_context(token_window(tokens, index))
}

/// Up to three tokens before the fault and three starting at it, each
/// rendered as symbol and count, with the faulty token marked.
fn token_window(tokens: &[Token], index: usize) -> ContextWindow {
    let from = index.saturating_sub(CONTEXT_TOKENS);
    let to = (index + CONTEXT_TOKENS).min(tokens.len());

    let before: String = tokens[from..index].iter().map(Token::to_string).collect();
    let marked = tokens.get(index).map(Token::to_string).unwrap_or_default();
    let after: String = tokens[(index + 1).min(to)..to]
        .iter()
        .map(Token::to_string)
        .collect();

    let marker_start = before.chars().count();
    let marker_len = marked.chars().count();
    ContextWindow::new(format!("{}{}{}", before, marked, after), marker_start, marker_len)
}
