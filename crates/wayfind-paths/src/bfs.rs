use std::collections::VecDeque;

use wayfind_core::{Coord, Dims};

use crate::neighbors::Neighbors;
use crate::traits::Terrain;

/// Sentinel value meaning "unreachable" in a [`DistanceMap`].
const UNREACHABLE: u32 = u32::MAX;

/// Unit-cost step distances from one source cell.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    dims: Dims,
    dist: Vec<u32>,
}

impl DistanceMap {
    /// Steps from the source to `c`, or `None` if `c` is out of bounds or
    /// unreachable.
    pub fn at(&self, c: Coord) -> Option<u32> {
        let i = self.dims.index(c)?;
        match self.dist[i] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Number of cells reached, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}

/// Compute a breadth-first distance map from `source` over cardinal moves.
///
/// A blocked or out-of-bounds source reaches nothing.
pub fn bfs_map<T: Terrain + ?Sized>(terrain: &T, source: Coord) -> DistanceMap {
    let dims = terrain.dims();
    let mut dist = vec![UNREACHABLE; dims.len()];

    let Some(si) = dims.index(source).filter(|_| terrain.passable(source)) else {
        return DistanceMap { dims, dist };
    };
    dist[si] = 0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(si);
    let mut neighbors = Neighbors::new();

    while let Some(ci) = queue.pop_front() {
        let current_dist = dist[ci];
        let cp = dims.coord(ci);
        for &np in neighbors.cardinal(cp, |c| dims.contains(c) && terrain.passable(c)) {
            let Some(ni) = dims.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = current_dist + 1;
            queue.push_back(ni);
        }
    }

    DistanceMap { dims, dist }
}
