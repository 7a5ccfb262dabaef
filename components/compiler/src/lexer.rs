//! Source tokenizer
//!
//! Scans source characters, ignoring everything outside the eight command
//! symbols, and folds runs of the same non-bracket symbol into one counted
//! token. Ignored characters do not break a run; brackets always do and are
//! never folded.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use bytecode_system::Opcode;
use core_types::BrickResult;
use tracing::debug;

use crate::error;

/// The eight source commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `>`
    MoveRight,
    /// `<`
    MoveLeft,
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
}

impl Symbol {
    /// Recognize a source character
    pub fn from_char(c: char) -> Option<Symbol> {
        let symbol = match c {
            '>' => Symbol::MoveRight,
            '<' => Symbol::MoveLeft,
            '+' => Symbol::Increment,
            '-' => Symbol::Decrement,
            '.' => Symbol::Output,
            ',' => Symbol::Input,
            '[' => Symbol::LoopStart,
            ']' => Symbol::LoopEnd,
            _ => return None,
        };
        Some(symbol)
    }

    /// The source character for this symbol
    pub fn as_char(&self) -> char {
        match self {
            Symbol::MoveRight => '>',
            Symbol::MoveLeft => '<',
            Symbol::Increment => '+',
            Symbol::Decrement => '-',
            Symbol::Output => '.',
            Symbol::Input => ',',
            Symbol::LoopStart => '[',
            Symbol::LoopEnd => ']',
        }
    }

    /// Check if this symbol is `[` or `]`
    pub fn is_bracket(&self) -> bool {
        matches!(self, Symbol::LoopStart | Symbol::LoopEnd)
    }

    /// The opcode this symbol compiles to
    pub fn opcode(&self) -> Opcode {
        match self {
            Symbol::MoveRight => Opcode::MoveRight,
            Symbol::MoveLeft => Opcode::MoveLeft,
            Symbol::Increment => Opcode::Add,
            Symbol::Decrement => Opcode::Sub,
            Symbol::Output => Opcode::Output,
            Symbol::Input => Opcode::Input,
            Symbol::LoopStart => Opcode::JumpIfZero,
            Symbol::LoopEnd => Opcode::JumpIfNonZero,
        }
    }
}

/// One run of identical symbols, or one bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The command
    pub symbol: Symbol,
    /// How many times it repeats; always 1 for brackets
    pub count: u64,
}

impl Token {
    /// Create a token
    pub fn new(symbol: Symbol, count: u64) -> Self {
        Self { symbol, count }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol.as_char(), self.count)
    }
}

/// Source tokenizer
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
        }
    }

    /// Produce the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Option<Token> {
        let symbol = self.next_symbol()?;
        if symbol.is_bracket() {
            return Some(Token::new(symbol, 1));
        }

        let mut count = 1;
        while let Some(&c) = self.chars.peek() {
            match Symbol::from_char(c) {
                Some(next) if next == symbol => count += 1,
                Some(_) => break,
                None => {}
            }
            self.chars.next();
        }
        Some(Token::new(symbol, count))
    }

    /// Tokenize the whole source.
    ///
    /// # Errors
    ///
    /// * `EmptySource` - the source has zero length
    pub fn tokenize(mut self) -> BrickResult<Vec<Token>> {
        if self.source.is_empty() {
            return Err(error::empty_source());
        }

        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        debug!(
            chars = self.source.len(),
            tokens = tokens.len(),
            "tokenized source"
        );
        Ok(tokens)
    }

    fn next_symbol(&mut self) -> Option<Symbol> {
        self.chars.by_ref().find_map(Symbol::from_char)
    }
}
