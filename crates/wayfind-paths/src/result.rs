use std::fmt;

use wayfind_core::Coord;

/// Which end of a search an input failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// An ordered sequence of cells from source to destination, both inclusive.
///
/// Never empty. With the `serde` feature it is (de)serialized as a plain
/// list of cells, and an empty list is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Coord>", into = "Vec<Coord>")
)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// A path that starts and ends on `c`.
    pub fn single(c: Coord) -> Self {
        Self { cells: vec![c] }
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a path holds at least its source.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit steps taken.
    #[inline]
    pub fn cost(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell.
    pub fn source(&self) -> Coord {
        self.cells[0]
    }

    /// Last cell.
    pub fn destination(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// The cells as a slice.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}

/// Error for building a [`Path`] out of no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPath;

impl fmt::Display for EmptyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("path: no cells")
    }
}

impl std::error::Error for EmptyPath {}

impl TryFrom<Vec<Coord>> for Path {
    type Error = EmptyPath;

    fn try_from(cells: Vec<Coord>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err(EmptyPath);
        }
        Ok(Self { cells })
    }
}

impl From<Path> for Vec<Coord> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    /// Arrow-joined trace: `-> (8, 0) -> (7, 0) -> ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "-> {c}")?;
        }
        Ok(())
    }
}

/// Outcome of a search. Every variant is an ordinary value; none of them
/// is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// An endpoint lies outside the grid.
    InvalidCoordinate(Endpoint),
    /// An endpoint is in bounds but blocked.
    BlockedEndpoint(Endpoint),
    /// Source and destination are the same passable cell.
    AlreadyAtDestination(Coord),
    /// A shortest path.
    Found(Path),
    /// The destination cannot be reached from the source.
    NotFound,
}

impl PathResult {
    /// Whether the search produced a path (possibly the trivial one).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Found(_) | Self::AlreadyAtDestination(_))
    }

    /// The path, if any. [`AlreadyAtDestination`](Self::AlreadyAtDestination)
    /// yields the one-cell path.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::AlreadyAtDestination(c) => Some(Path::single(c)),
            _ => None,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and closed.
    pub expanded: usize,
    /// Frontier pushes, including re-pushes of already queued cells.
    pub pushed: usize,
    /// Popped entries discarded because their cell was already closed.
    pub stale: usize,
}
