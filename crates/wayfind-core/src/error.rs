use std::fmt;

use crate::geom::Dims;

/// Errors that can occur when building or parsing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row with no cells.
    Empty,
    /// A row whose length differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A token that is not a valid cell code.
    InvalidCell {
        row: usize,
        col: usize,
        token: String,
    },
    /// The grid parsed fine but has the wrong shape.
    DimensionMismatch { expected: Dims, found: Dims },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCell { row, col, token } => write!(
                f,
                "grid: invalid cell \u{201c}{token}\u{201d} at ({row}, {col}), expected 0 or 1"
            ),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
