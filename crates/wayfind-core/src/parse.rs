//! The grid text format.
//!
//! One grid row per non-empty line, cells separated by whitespace, `0` for
//! blocked and `1` for passable:
//!
//! ```text
//! 1 0 1 1
//! 1 1 1 0
//! ```

use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Dims;
use crate::grid::{Cell, Grid};

impl Grid {
    /// Parse a grid from text.
    ///
    /// When `expected` is given, a grid of any other shape is rejected with
    /// [`GridError::DimensionMismatch`].
    pub fn parse(text: &str, expected: Option<Dims>) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let r = rows.len();
            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(col, token)| {
                    token
                        .parse::<i64>()
                        .ok()
                        .and_then(Cell::from_code)
                        .ok_or_else(|| GridError::InvalidCell {
                            row: r,
                            col,
                            token: token.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let grid = Grid::from_rows(&rows)?;
        if let Some(expected) = expected {
            if grid.dims() != expected {
                log::warn!("rejecting {} grid, expected {}", grid.dims(), expected);
                return Err(GridError::DimensionMismatch {
                    expected,
                    found: grid.dims(),
                });
            }
        }
        log::debug!(
            "parsed {} grid with {} passable cells",
            grid.dims(),
            grid.count_passable()
        );
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s, None)
    }
}
