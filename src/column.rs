//! Bounded columns of cells.

use crate::cell::Cell;
use crate::error::{GridError, GridResult};

/// Fixed-capacity column of cells, indexed by row.
///
/// A column's capacity is the owning grid's height and is fixed at
/// construction. Slots start unset and are populated one validated write
/// at a time; [`Column::validate`] checks that no slot was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    cells: Box<[Option<Cell>]>,
}

impl Column {
    /// Creates a column with `height` unset slots.
    pub fn new(height: usize) -> Self {
        Self {
            cells: vec![None; height].into_boxed_slice(),
        }
    }

    /// Creates a column of `height` slots populated from `(row, symbol)`
    /// pairs.
    ///
    /// Every pair goes through the validated write path of
    /// [`Column::set`], so the first out-of-bounds row or unknown symbol
    /// fails the whole construction.
    pub fn with_cells(
        height: usize,
        cells: impl IntoIterator<Item = (usize, char)>,
    ) -> GridResult<Self> {
        let mut ret = Self::new(height);
        for (row, symbol) in cells {
            ret.set(row, symbol)?;
        }
        Ok(ret)
    }

    /// Creates a fully populated column with every slot set to `cell`.
    pub fn repeat(height: usize, cell: Cell) -> Self {
        Self {
            cells: vec![Some(cell); height].into_boxed_slice(),
        }
    }

    /// Returns the column's capacity.
    #[inline]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of populated slots.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Sets the cell at `row` from a raw symbol.
    ///
    /// The row is bounds-checked and the symbol validated before any
    /// mutation.
    pub fn set(&mut self, row: usize, symbol: char) -> GridResult<()> {
        self.check_row(row)?;
        self.cells[row] = Some(Cell::from_symbol(symbol)?);
        Ok(())
    }

    /// Sets the cell at `row` to an already-validated value.
    pub fn set_cell(&mut self, row: usize, cell: Cell) -> GridResult<()> {
        self.check_row(row)?;
        self.cells[row] = Some(cell);
        Ok(())
    }

    /// Returns the cell at `row`.
    ///
    /// Reads are bounds-checked like writes; reading an in-bounds slot
    /// that was never set fails with [`GridError::UnsetCell`].
    pub fn get(&self, row: usize) -> GridResult<Cell> {
        self.check_row(row)?;
        self.cells[row].ok_or(GridError::UnsetCell { row })
    }

    /// Returns an iterator over the column's slots in row order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Cell>> + '_ {
        self.cells.iter().copied()
    }

    /// Checks that every slot in the column is populated.
    pub fn validate(&self) -> GridResult<()> {
        if self.cells.iter().any(|slot| slot.is_none()) {
            return Err(GridError::IncompleteColumn {
                filled: self.filled(),
                height: self.height(),
            });
        }
        Ok(())
    }

    fn check_row(&self, row: usize) -> GridResult<()> {
        if row >= self.height() {
            return Err(GridError::RowOutOfBounds {
                row,
                height: self.height(),
            });
        }
        Ok(())
    }
}
