//! Enumerated cell values.
//!
//! Every cell in a grid holds one value from a closed, ordered set: two
//! agent markers and an empty marker. `CELLS` lists the set in declaration
//! order for positional access.

use std::fmt;

use itertools::Itertools;

use crate::error::{GridError, GridResult};

pub use Cell::*;

/// Single cell value in a Schelling grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    /// Agent of the first kind.
    X,
    /// Agent of the second kind.
    O,
    /// Unoccupied cell.
    Empty,
}

/// List of permitted cell values, in declaration order.
pub const CELLS: &[Cell] = &[Cell::X, Cell::O, Cell::Empty];

impl Cell {
    /// Returns the single-character symbol for this value.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => ' ',
        }
    }

    /// Looks up a cell value from its symbol.
    ///
    /// Symbols are case-insensitive; lowercase input is normalized to
    /// uppercase before matching. Symbols outside the set fail with
    /// [`GridError::UnknownSymbol`] naming the normalized symbol.
    pub fn from_symbol(symbol: char) -> GridResult<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Ok(Cell::X),
            'O' => Ok(Cell::O),
            ' ' => Ok(Cell::Empty),
            other => Err(GridError::UnknownSymbol(other)),
        }
    }

    /// Returns whether this cell is unoccupied.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns whether this cell holds an agent.
    #[inline]
    pub fn is_agent(self) -> bool {
        !self.is_empty()
    }

    /// Returns a human-readable list of all permitted symbols.
    pub fn symbols() -> String {
        CELLS
            .iter()
            .map(|cell| format!("{:?}", cell.symbol()))
            .join(", ")
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
