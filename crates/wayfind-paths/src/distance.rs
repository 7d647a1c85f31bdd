use wayfind_core::Coord;

/// Euclidean (L2) distance between two coordinates.
///
/// Never exceeds the number of cardinal steps between them, so it is an
/// admissible A* heuristic for unit-cost four-way movement.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}
