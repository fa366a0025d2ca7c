//! Flat-text grid format: one line per row, one character per cell.
//!
//! This is the format Schelling neighborhood files are stored in. There is
//! no header; dimensions are inferred from the text, with the line count
//! as the grid height and the first line's length as the grid width. Input
//! must be rectangular. Symbols are accepted as-is at parse time and
//! validated when converting to a [`Grid`](crate::grid::Grid).

use thiserror::Error;

mod components;
mod convert;

pub use components::Flat;

use crate::error::GridError;

/// Result type returned by fallible flat-format routines.
pub type FlatResult<T> = Result<T, FlatError>;

/// Error encountered during flat-format import/export.
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum FlatError {
    #[error("empty file")]
    Empty,
    #[error("line {line} is {len} cells long; expected {expected}")]
    Ragged {
        line: usize,
        len: usize,
        expected: usize,
    },
    #[error("error reading grid file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}
