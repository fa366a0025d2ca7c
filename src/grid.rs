//! 2D data tables of cells.

use itertools::Itertools;
use std::fmt;

use crate::cell::Cell;
use crate::column::Column;
use crate::error::{GridError, GridResult};

/// Fixed-size 2D table of cells, stored column-major.
///
/// A grid owns one optional [`Column`] slot per column index. Dimensions
/// are fixed at construction; columns are materialized by assignment or by
/// [`Grid::populate`], never lazily. Structural integrity is checked on
/// demand with [`Grid::validate`]; nothing prevents reading from an
/// unvalidated grid, but reads of unset cells and absent columns fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    columns: Box<[Option<Column>]>,
}

impl Grid {
    /// Creates a grid with the given dimensions and no columns.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            columns: vec![None; width].into_boxed_slice(),
        }
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Replaces the column at `index` with one built from `(row, symbol)`
    /// pairs.
    ///
    /// The new column has the grid's height as its capacity and is built
    /// through the validated per-cell write path; the slot is only
    /// replaced once the whole column builds, so a failed assignment
    /// leaves any existing column in place.
    pub fn set_column(
        &mut self,
        index: usize,
        cells: impl IntoIterator<Item = (usize, char)>,
    ) -> GridResult<()> {
        self.check_column(index)?;
        let column = Column::with_cells(self.height, cells)?;
        self.columns[index] = Some(column);
        Ok(())
    }

    /// Returns the column at `index`.
    ///
    /// Fails with [`GridError::MissingColumn`] if the column was never
    /// assigned; columns are not materialized lazily.
    pub fn column(&self, index: usize) -> GridResult<&Column> {
        self.check_column(index)?;
        self.columns[index]
            .as_ref()
            .ok_or(GridError::MissingColumn { column: index })
    }

    /// Returns a mutable reference to the column at `index`.
    pub fn column_mut(&mut self, index: usize) -> GridResult<&mut Column> {
        self.check_column(index)?;
        self.columns[index]
            .as_mut()
            .ok_or(GridError::MissingColumn { column: index })
    }

    /// Returns the cell at the given column and row.
    pub fn get(&self, column: usize, row: usize) -> GridResult<Cell> {
        self.column(column)?.get(row)
    }

    /// Sets the cell at the given column and row from a raw symbol.
    ///
    /// The column must already exist; assign it with
    /// [`Grid::set_column`] or [`Grid::populate`] first.
    pub fn set(&mut self, column: usize, row: usize, symbol: char) -> GridResult<()> {
        self.column_mut(column)?.set(row, symbol)
    }

    /// Sets every cell in the grid to `default`, recreating all columns.
    ///
    /// The default symbol is validated up front, so an unknown symbol
    /// fails before any column is created.
    pub fn populate(&mut self, default: char) -> GridResult<()> {
        let cell = Cell::from_symbol(default)?;
        for slot in self.columns.iter_mut() {
            *slot = Some(Column::repeat(self.height, cell));
        }
        Ok(())
    }

    /// Checks that every column is present and fully populated.
    ///
    /// Columns are validated in index order and the first failure is
    /// returned; violations are not aggregated.
    pub fn validate(&self) -> GridResult<()> {
        let present = self.columns.iter().filter(|slot| slot.is_some()).count();
        if present != self.width {
            return Err(GridError::IncompleteGrid {
                present,
                width: self.width,
            });
        }
        for column in self.columns.iter().flatten() {
            column.validate()?;
        }
        Ok(())
    }

    fn check_column(&self, index: usize) -> GridResult<()> {
        if index >= self.width {
            return Err(GridError::ColumnOutOfBounds {
                column: index,
                width: self.width,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    /// Renders the grid row-major: a header line of column indices, then
    /// one line per row holding the row index and the row's symbols read
    /// across all columns. Unset cells render as `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}", (0..self.width).join(" "))?;
        for row in 0..self.height {
            let symbols = self
                .columns
                .iter()
                .map(|slot| {
                    slot.as_ref()
                        .and_then(|column| column.get(row).ok())
                        .map_or('?', Cell::symbol)
                })
                .join(" ");
            write!(f, "\n{} {}", row, symbols)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_starts_without_columns() {
        let grid = Grid::new(2, 2);
        assert_eq!(
            Err(GridError::MissingColumn { column: 0 }),
            grid.column(0).map(|_| ()),
        );
        assert_eq!(Err(GridError::MissingColumn { column: 0 }), grid.get(0, 0));
    }

    #[test]
    fn test_grid_column_bounds() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(
            Err(GridError::ColumnOutOfBounds { column: 2, width: 2 }),
            grid.get(2, 0),
        );
        assert_eq!(
            Err(GridError::ColumnOutOfBounds { column: 9, width: 2 }),
            grid.set_column(9, vec![(0, 'X')]),
        );
    }

    #[test]
    fn test_grid_set_column_replaces_whole_column() {
        let mut grid = Grid::new(1, 2);
        grid.set_column(0, vec![(0, 'X'), (1, 'O')]).unwrap();
        assert_eq!(Ok(Cell::X), grid.get(0, 0));

        grid.set_column(0, vec![(0, ' ')]).unwrap();
        assert_eq!(Ok(Cell::Empty), grid.get(0, 0));
        // The replacement column is fresh, not merged with the old one.
        assert_eq!(Err(GridError::UnsetCell { row: 1 }), grid.get(0, 1));
    }

    #[test]
    fn test_grid_failed_assignment_keeps_old_column() {
        let mut grid = Grid::new(1, 2);
        grid.set_column(0, vec![(0, 'X'), (1, 'O')]).unwrap();
        assert_eq!(
            Err(GridError::UnknownSymbol('Q')),
            grid.set_column(0, vec![(0, 'Q')]),
        );
        assert_eq!(Ok(Cell::X), grid.get(0, 0));
        assert_eq!(Ok(Cell::O), grid.get(0, 1));
    }

    #[test]
    fn test_grid_populate() {
        let mut grid = Grid::new(3, 2);
        grid.populate(' ').unwrap();
        assert_eq!(Ok(()), grid.validate());
        for column in 0..3 {
            for row in 0..2 {
                assert_eq!(Ok(Cell::Empty), grid.get(column, row));
            }
        }
    }

    #[test]
    fn test_grid_populate_rejects_unknown_default() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(Err(GridError::UnknownSymbol('Q')), grid.populate('Q'));
        // No column may be created by the failed populate.
        assert_eq!(Err(GridError::MissingColumn { column: 0 }), grid.get(0, 0));
        assert_eq!(
            Err(GridError::IncompleteGrid {
                present: 0,
                width: 2,
            }),
            grid.validate(),
        );
    }

    #[test]
    fn test_grid_validate_recurses_into_columns() {
        let mut grid = Grid::new(2, 2);
        grid.set_column(0, vec![(0, 'X'), (1, 'O')]).unwrap();
        assert_eq!(
            Err(GridError::IncompleteGrid {
                present: 1,
                width: 2,
            }),
            grid.validate(),
        );

        grid.set_column(1, vec![(0, 'X')]).unwrap();
        assert_eq!(
            Err(GridError::IncompleteColumn {
                filled: 1,
                height: 2,
            }),
            grid.validate(),
        );

        grid.column_mut(1).unwrap().set(1, 'o').unwrap();
        assert_eq!(Ok(()), grid.validate());
    }

    #[test]
    fn test_grid_cell_write_through_column() {
        let mut grid = Grid::new(2, 2);
        grid.populate('x').unwrap();
        grid.set(1, 1, 'O').unwrap();
        assert_eq!(Ok(Cell::O), grid.get(1, 1));
        assert_eq!(Ok(Cell::X), grid.get(1, 0));
        assert_eq!(
            Err(GridError::RowOutOfBounds { row: 5, height: 2 }),
            grid.set(0, 5, 'X'),
        );
    }

    #[test]
    fn test_grid_display() {
        let mut grid = Grid::new(2, 2);
        grid.set_column(0, vec![(0, 'X'), (1, 'O')]).unwrap();
        grid.set_column(1, vec![(0, 'O'), (1, 'X')]).unwrap();
        assert_eq!("  0 1\n0 X O\n1 O X", grid.to_string());
    }

    #[test]
    fn test_grid_display_marks_unset_cells() {
        let mut grid = Grid::new(2, 1);
        grid.set_column(0, vec![(0, 'X')]).unwrap();
        assert_eq!("  0 1\n0 X ?", grid.to_string());
    }
}
