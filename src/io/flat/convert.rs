use itertools::Itertools;
use std::path::Path;

use super::{Flat, FlatResult};
use crate::cell::Cell;
use crate::grid::Grid;

impl Flat {
    /// Builds a grid from the matrix, transposing the row-major text into
    /// column-major storage.
    ///
    /// Source row `r`, column `c` lands at column `c`, row `r` of the
    /// grid, so `grid.column(c)?.get(r)` reads the same symbol the file
    /// showed. Every cell goes through the validated assignment path of
    /// [`Grid::set_column`]. The grid is returned populated but not
    /// validated.
    pub fn to_grid(&self) -> FlatResult<Grid> {
        let mut grid = Grid::new(self.width(), self.height());
        for column in 0..self.width() {
            let cells = self
                .rows
                .iter()
                .enumerate()
                .map(|(row, chars)| (row, chars[column]));
            grid.set_column(column, cells)?;
        }
        Ok(grid)
    }

    /// Reads a fully populated grid back into a flat matrix.
    ///
    /// Fails if any column is absent or any cell is unset.
    pub fn from_grid(grid: &Grid) -> FlatResult<Self> {
        let rows: Vec<Vec<char>> = (0..grid.height())
            .map(|row| {
                (0..grid.width())
                    .map(|column| grid.get(column, row).map(Cell::symbol))
                    .try_collect()
            })
            .try_collect()?;
        Ok(Self { rows })
    }
}

impl Grid {
    /// Parses a grid from flat text.
    pub fn from_flat_str(s: &str) -> FlatResult<Self> {
        s.parse::<Flat>()?.to_grid()
    }

    /// Loads a grid from a flat-text file.
    ///
    /// The file is read in a single scoped acquisition; I/O failures
    /// propagate to the caller with no recovery path.
    pub fn from_file(path: impl AsRef<Path>) -> FlatResult<Self> {
        Self::from_flat_str(&std::fs::read_to_string(path)?)
    }

    /// Serializes a fully populated grid to flat text.
    pub fn to_flat_string(&self) -> FlatResult<String> {
        Ok(Flat::from_grid(self)?.to_string())
    }
}
