use wayfind_core::{Coord, Dims, Grid};

/// Read-only view of a grid that searches run over.
///
/// Both queries must be O(1); they are called once per neighbour during
/// expansion.
pub trait Terrain {
    /// Dimensions of the searchable area.
    fn dims(&self) -> Dims;

    /// Whether `c` can be entered. Only called for coordinates inside
    /// [`dims`](Terrain::dims).
    fn passable(&self, c: Coord) -> bool;
}

impl Terrain for Grid {
    #[inline]
    fn dims(&self) -> Dims {
        Grid::dims(self)
    }

    #[inline]
    fn passable(&self, c: Coord) -> bool {
        self.is_passable(c)
    }
}
