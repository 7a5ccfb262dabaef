//! Bidirectional memory tape
//!
//! Two growable cell vectors joined at a virtual origin: address `a >= 0`
//! lives at `forward[a]`, address `a < 0` at `backward[-a - 1]`. Both sides
//! zero-fill as they grow and never shrink.

use std::fmt;

use core_types::{BrickError, BrickResult, Cell, ErrorKind};

/// Which half of the tape an address falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Addresses `>= 0`
    Forward,
    /// Addresses `< 0`
    Backward,
}

/// Unbounded bidirectional tape with a signed pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    forward: Vec<Cell>,
    backward: Vec<Cell>,
    pointer: i64,
}

impl Tape {
    /// Create a tape holding a single zero cell at address 0
    pub fn new() -> Self {
        Self {
            forward: vec![Cell::ZERO],
            backward: Vec::new(),
            pointer: 0,
        }
    }

    /// Map `address` to its side and local index, growing that side so the
    /// index exists.
    pub fn resolve(&mut self, address: i64) -> BrickResult<(Side, usize)> {
        let (side, index) = split(address);
        let cells = match side {
            Side::Forward => &mut self.forward,
            Side::Backward => &mut self.backward,
        };
        if index >= cells.len() {
            let additional = index - cells.len() + 1;
            cells
                .try_reserve(additional)
                .map_err(|_| too_far(address))?;
            cells.resize(index + 1, Cell::ZERO);
        }
        Ok((side, index))
    }

    /// Current pointer
    pub fn pointer(&self) -> i64 {
        self.pointer
    }

    /// Set the pointer to an absolute address
    pub fn seek(&mut self, address: i64) -> BrickResult<()> {
        self.resolve(address)?;
        self.pointer = address;
        Ok(())
    }

    /// Move the pointer by `delta`
    pub fn shift(&mut self, delta: i64) -> BrickResult<()> {
        let address = self.pointer.checked_add(delta).ok_or_else(|| {
            BrickError::new(
                ErrorKind::AddressOutOfRange,
                format!("pointer {} cannot move by {}", self.pointer, delta),
            )
        })?;
        self.seek(address)
    }

    /// Mutable access to the cell at `address`
    pub fn cell_mut(&mut self, address: i64) -> BrickResult<&mut Cell> {
        let (side, index) = self.resolve(address)?;
        let cells = match side {
            Side::Forward => &mut self.forward,
            Side::Backward => &mut self.backward,
        };
        Ok(&mut cells[index])
    }

    /// Read the cell at `address`
    pub fn get(&mut self, address: i64) -> BrickResult<Cell> {
        Ok(*self.cell_mut(address)?)
    }

    /// Write the cell at `address`
    pub fn set(&mut self, address: i64, cell: Cell) -> BrickResult<()> {
        *self.cell_mut(address)? = cell;
        Ok(())
    }

    /// Read the cell under the pointer
    pub fn current(&mut self) -> BrickResult<Cell> {
        self.get(self.pointer)
    }

    /// Read without growing; untouched addresses read as zero
    pub fn peek(&self, address: i64) -> Cell {
        let (side, index) = split(address);
        let cells = match side {
            Side::Forward => &self.forward,
            Side::Backward => &self.backward,
        };
        cells.get(index).copied().unwrap_or_default()
    }

    /// Number of materialized cells on one side
    pub fn len(&self, side: Side) -> usize {
        match side {
            Side::Forward => self.forward.len(),
            Side::Backward => self.backward.len(),
        }
    }

    /// Lowest materialized address
    pub fn lowest_address(&self) -> i64 {
        -(self.backward.len() as i64)
    }

    /// Highest materialized address
    pub fn highest_address(&self) -> i64 {
        self.forward.len() as i64 - 1
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

/// Cells in address order, then the pointer.
impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .backward
            .iter()
            .rev()
            .chain(self.forward.iter())
            .map(Cell::to_string)
            .collect();
        writeln!(
            f,
            "...[{}]... ({}..={})",
            cells.join(", "),
            self.lowest_address(),
            self.highest_address()
        )?;
        write!(f, "pointer: {}", self.pointer)
    }
}

fn split(address: i64) -> (Side, usize) {
    if address >= 0 {
        (Side::Forward, address as usize)
    } else {
        // -(a + 1) cannot overflow, even for i64::MIN
        (Side::Backward, (-(address + 1)) as usize)
    }
}

fn too_far(address: i64) -> BrickError {
    BrickError::new(
        ErrorKind::AddressOutOfRange,
        format!("tape cannot grow to address {}", address),
    )
}
