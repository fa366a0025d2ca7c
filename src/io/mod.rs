//! Formats for importing/exporting grids.

pub mod flat;

pub use flat::{Flat, FlatError, FlatResult};
