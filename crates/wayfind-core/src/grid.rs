//! A dense 2D grid of passable / blocked cells.
//!
//! Unlike a view-based grid, a [`Grid`] owns its storage outright. Searches
//! borrow it immutably, so it cannot change underneath them.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Coord, Dims, DimsIter};

/// The state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Cannot be entered. Encoded as `0`.
    #[default]
    Blocked,
    /// Can be entered. Encoded as `1`.
    Passable,
}

impl Cell {
    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Passable)
    }

    /// The integer encoding used by the grid text format.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Blocked => 0,
            Self::Passable => 1,
        }
    }

    /// Decode the integer encoding used by the grid text format.
    #[inline]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Blocked),
            1 => Some(Self::Passable),
            _ => None,
        }
    }
}

/// A rectangular grid of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    dims: Dims,
}

impl Grid {
    /// Create a grid where every cell is passable.
    pub fn new(dims: Dims) -> Self {
        Self::filled(dims, Cell::Passable)
    }

    /// Create a grid with every cell set to `cell`.
    pub fn filled(dims: Dims, cell: Cell) -> Self {
        Self {
            cells: vec![cell; dims.len()],
            dims,
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            dims: Dims::new(rows.len() as i32, cols as i32),
        })
    }

    /// Dimensions of the grid.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Get the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_passable)
    }

    /// Set the cell at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) {
        if let Some(i) = self.dims.index(c) {
            self.cells[i] = cell;
        }
    }

    /// Number of passable cells.
    pub fn count_passable(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.dims.iter(),
        }
    }
}

impl fmt::Display for Grid {
    /// Writes the grid in the same text format [`Grid::parse`] reads.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.rows {
            for col in 0..self.dims.cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let cell = self.at(Coord::new(row, col)).unwrap_or_default();
                write!(f, "{}", cell.code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: DimsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        Some((c, self.grid.at(c).unwrap_or_default()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
