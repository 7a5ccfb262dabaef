//! Bracket resolution
//!
//! Pairs each `[` token with its matching `]` in one pass over the token
//! sequence using an explicit stack of open indices.

use std::collections::BTreeMap;

use core_types::BrickResult;
use tracing::debug;

use crate::error;
use crate::lexer::{Symbol, Token};

/// Bijection between open and close bracket token indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketMap {
    open_to_close: BTreeMap<usize, usize>,
    close_to_open: BTreeMap<usize, usize>,
}

impl BracketMap {
    /// Resolve every bracket in `tokens`.
    ///
    /// # Errors
    ///
    /// * `UnmatchedClose` - a `]` appears with no open `[`, reported at that `]`
    /// * `UnmatchedOpen` - a `[` is left open, reported at the innermost one
    pub fn resolve(tokens: &[Token]) -> BrickResult<Self> {
        let mut map = Self::default();
        let mut open: Vec<usize> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match token.symbol {
                Symbol::LoopStart => open.push(i),
                Symbol::LoopEnd => {
                    let start = open.pop().ok_or_else(|| error::unmatched_close(tokens, i))?;
                    map.open_to_close.insert(start, i);
                    map.close_to_open.insert(i, start);
                }
                _ => {}
            }
        }

        if let Some(&innermost) = open.last() {
            return Err(error::unmatched_open(tokens, innermost));
        }

        debug!(pairs = map.len(), "resolved brackets");
        Ok(map)
    }

    /// Index of the `]` matching the `[` at `open`
    pub fn close_for(&self, open: usize) -> Option<usize> {
        self.open_to_close.get(&open).copied()
    }

    /// Index of the `[` matching the `]` at `close`
    pub fn open_for(&self, close: usize) -> Option<usize> {
        self.close_to_open.get(&close).copied()
    }

    /// Number of bracket pairs
    pub fn len(&self) -> usize {
        self.open_to_close.len()
    }

    /// Check whether there are no pairs
    pub fn is_empty(&self) -> bool {
        self.open_to_close.is_empty()
    }

    /// `(open, close)` pairs ordered by open index
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.open_to_close.iter().map(|(&open, &close)| (open, close))
    }
}
