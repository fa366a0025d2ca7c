use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use super::{FlatError, FlatResult};

/// Parsed flat-text grid: a rectangular row-major character matrix.
///
/// Characters are kept exactly as read; case normalization and symbol
/// validation happen when converting to a [`Grid`](crate::grid::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flat {
    pub(super) rows: Vec<Vec<char>>,
}

impl Flat {
    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

impl FromStr for Flat {
    type Err = FlatError;

    fn from_str(s: &str) -> FlatResult<Self> {
        let rows = s
            .lines()
            .map(|line| line.chars().collect_vec())
            .collect_vec();

        // Width is inferred from the first line; every other line must
        // match it exactly. Line numbers in errors are 1-based.
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(FlatError::Empty),
        };
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(FlatError::Ragged {
                    line: index + 1,
                    len: row.len(),
                    expected,
                });
            }
        }

        Ok(Self { rows })
    }
}

impl fmt::Display for Flat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
