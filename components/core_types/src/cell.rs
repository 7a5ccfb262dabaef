//! Normalized tape cells.
//!
//! Cells hold values in `0..=255`. Overflow and underflow are folded back with
//! a modulus of 255, not 256: a value above 255 has 255 subtracted until it
//! fits, a negative value has 255 added until it is non-negative. So
//! `255 + 1` is `1` and `0 - 1` is `254`, and `255` itself is never folded.

use std::fmt;

const MODULUS: u128 = 255;

/// One normalized storage unit on the tape.
///
/// # Examples
///
/// ```
/// use core_types::Cell;
///
/// assert_eq!(Cell::new(255).add(1).value(), 1);
/// assert_eq!(Cell::new(0).sub(1).value(), 254);
/// assert_eq!(Cell::load(256).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// A zero cell.
    pub const ZERO: Cell = Cell(0);

    /// Wrap an already normalized value.
    pub fn new(value: u8) -> Self {
        Cell(value)
    }

    /// Normalize an arbitrary non-negative value into a cell.
    pub fn load(value: u64) -> Self {
        Cell(fold_down(u128::from(value)))
    }

    /// Add `amount`, folding overflow.
    pub fn add(self, amount: u64) -> Self {
        Cell(fold_down(u128::from(self.0) + u128::from(amount)))
    }

    /// Subtract `amount`, folding underflow.
    pub fn sub(self, amount: u64) -> Self {
        let value = i128::from(self.0) - i128::from(amount);
        if value >= 0 {
            // Never above the starting value, so already in range.
            Cell(value as u8)
        } else {
            Cell(value.rem_euclid(MODULUS as i128) as u8)
        }
    }

    /// The stored value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether the cell holds zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The character whose code point equals the cell value.
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

/// Repeated subtraction of 255 while above 255, in closed form.
fn fold_down(value: u128) -> u8 {
    if value > 255 {
        ((value - 1) % MODULUS + 1) as u8
    } else {
        value as u8
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
