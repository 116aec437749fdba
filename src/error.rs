//! Errors reported while building a puzzle.
//!
//! Running out of placements is not an error: the solver reports it by
//! returning no further solutions.

use crate::coord::Cell;

/// An error raised while reading or validating puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The grid has no cells.
    #[error("puzzle grid is empty")]
    EmptyGrid,

    /// A row does not have the same width as the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A cell value is not a non-negative integer.
    #[error("invalid value {token:?} at row {row}, column {column}")]
    InvalidValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
        /// The text that failed to parse.
        token: String,
    },

    /// The raster scale is zero or negative.
    #[error("raster scale must be positive, got {0}")]
    InvalidScale(i32),

    /// A target asks for an area that no registered template has.
    #[error("target at {cell} requires area {area}, but no template has that area")]
    MissingTemplate {
        /// The target cell.
        cell: Cell,
        /// The required area.
        area: u32,
    },

    /// A template library was built at a different scale than the puzzle.
    #[error("template library uses scale {library}, puzzle uses scale {puzzle}")]
    ScaleMismatch {
        /// Scale of the template library.
        library: i32,
        /// Scale requested for the puzzle.
        puzzle: i32,
    },
}
