//! Structural errors shared by the grid containers.

use thiserror::Error;

use crate::cell::Cell;

/// Result type returned by fallible grid routines.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered while building, mutating, or validating a grid.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GridError {
    #[error("unknown cell symbol {0:?}; expected one of {}", Cell::symbols())]
    UnknownSymbol(char),
    #[error("row index out of bounds: {row} (height {height})")]
    RowOutOfBounds { row: usize, height: usize },
    #[error("column index out of bounds: {column} (width {width})")]
    ColumnOutOfBounds { column: usize, width: usize },
    #[error("no column at index {column}")]
    MissingColumn { column: usize },
    #[error("no cell at row {row}")]
    UnsetCell { row: usize },
    #[error("incorrect column size: {filled} of {height} cells set")]
    IncompleteColumn { filled: usize, height: usize },
    #[error("incorrect column count: {present} of {width} columns set")]
    IncompleteGrid { present: usize, width: usize },
}
