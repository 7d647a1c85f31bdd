use std::collections::BinaryHeap;

use wayfind_core::{Coord, Dims};

use crate::distance::euclidean;
use crate::neighbors::Neighbors;
use crate::node::{OpenEntry, SearchNode};
use crate::result::{Endpoint, Path, PathResult, SearchStats};
use crate::traits::Terrain;

/// Cost of a single cardinal step.
const STEP_COST: f64 = 1.0;

/// A* search over a borrowed [`Terrain`].
///
/// The finder copies the terrain's dimensions and the four direction deltas
/// into its own fields at construction. All per-search state (node table,
/// frontier) is allocated inside each call and dropped when it returns, so
/// one finder can run any number of independent searches.
pub struct PathFinder<'a, T: Terrain + ?Sized> {
    terrain: &'a T,
    rows: i32,
    cols: i32,
    directions: [Coord; 4],
}

impl<'a, T: Terrain + ?Sized> PathFinder<'a, T> {
    /// Create a finder over `terrain`, expanding neighbours up, down, left,
    /// right.
    pub fn new(terrain: &'a T) -> Self {
        let dims = terrain.dims();
        Self {
            terrain,
            rows: dims.rows,
            cols: dims.cols,
            directions: Coord::CARDINALS,
        }
    }

    /// Dimensions searched.
    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.cols)
    }

    /// Find a shortest path from `source` to `destination`.
    pub fn search(&self, source: Coord, destination: Coord) -> PathResult {
        self.search_with_stats(source, destination).0
    }

    /// Like [`search`](Self::search), also returning expansion counters.
    ///
    /// Inputs are checked in order: source bounds, destination bounds,
    /// source blocked, destination blocked, source equal to destination.
    pub fn search_with_stats(
        &self,
        source: Coord,
        destination: Coord,
    ) -> (PathResult, SearchStats) {
        let mut stats = SearchStats::default();
        let dims = self.dims();

        let Some(start_idx) = dims.index(source) else {
            return (PathResult::InvalidCoordinate(Endpoint::Source), stats);
        };
        let Some(goal_idx) = dims.index(destination) else {
            return (PathResult::InvalidCoordinate(Endpoint::Destination), stats);
        };
        if !self.terrain.passable(source) {
            return (PathResult::BlockedEndpoint(Endpoint::Source), stats);
        }
        if !self.terrain.passable(destination) {
            return (PathResult::BlockedEndpoint(Endpoint::Destination), stats);
        }
        if start_idx == goal_idx {
            return (PathResult::AlreadyAtDestination(source), stats);
        }

        let mut nodes = vec![SearchNode::default(); dims.len()];
        {
            let start = &mut nodes[start_idx];
            start.g = 0.0;
            start.h = 0.0;
            start.f = 0.0;
            start.parent = None;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        open.push(OpenEntry {
            f: 0.0,
            seq,
            idx: start_idx,
        });
        stats.pushed += 1;

        let mut neighbors = Neighbors::new();
        let in_play = |c: Coord| dims.contains(c) && self.terrain.passable(c);

        while let Some(OpenEntry { idx: ci, .. }) = open.pop() {
            // Lazy deletion: a cell may sit in the heap several times.
            if nodes[ci].closed {
                stats.stale += 1;
                continue;
            }
            nodes[ci].closed = true;
            stats.expanded += 1;

            if ci == goal_idx {
                let path = reconstruct(&nodes, dims, goal_idx);
                log::debug!(
                    "path {source} -> {destination}: {} steps, {} expanded, {} pushed, {} stale",
                    path.cost(),
                    stats.expanded,
                    stats.pushed,
                    stats.stale
                );
                return (PathResult::Found(path), stats);
            }

            let current = dims.coord(ci);
            let current_g = nodes[ci].g;
            log::trace!("expand {current} g={current_g}");

            for &np in neighbors.step(current, &self.directions, in_play) {
                let Some(ni) = dims.index(np) else {
                    continue;
                };
                let n = &mut nodes[ni];
                if n.closed {
                    continue;
                }

                let g_new = current_g + STEP_COST;
                let h_new = euclidean(np, destination);
                let f_new = g_new + h_new;
                if n.discovered() && f_new >= n.f {
                    continue;
                }

                n.g = g_new;
                n.h = h_new;
                n.f = f_new;
                n.parent = Some(ci);

                seq += 1;
                open.push(OpenEntry {
                    f: f_new,
                    seq,
                    idx: ni,
                });
                stats.pushed += 1;
            }
        }

        log::debug!(
            "no path {source} -> {destination}: {} expanded, {} pushed",
            stats.expanded,
            stats.pushed
        );
        (PathResult::NotFound, stats)
    }
}

/// Walk parent links back from `goal_idx` to the source and return the
/// cells in source-to-destination order.
///
/// Parents are only assigned to cells that are not yet closed and always
/// point at a closed cell, so the links form a tree rooted at the source.
fn reconstruct(nodes: &[SearchNode], dims: Dims, goal_idx: usize) -> Path {
    let mut cells = Vec::new();
    let mut ci = Some(goal_idx);
    while let Some(i) = ci {
        cells.push(dims.coord(i));
        ci = nodes[i].parent;
    }
    cells.reverse();
    Path::new(cells)
}

/// Find a shortest path on `terrain` from `source` to `destination`.
///
/// Shorthand for `PathFinder::new(terrain).search(source, destination)`.
pub fn search<T: Terrain + ?Sized>(
    terrain: &T,
    source: Coord,
    destination: Coord,
) -> PathResult {
    PathFinder::new(terrain).search(source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_map;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;
    use wayfind_core::{Cell, Grid};

    const SAMPLE: &str = "\
1 0 1 1 1 1 0 1 1 1
1 1 1 0 1 1 1 0 1 1
1 1 1 0 1 1 0 1 0 1
0 0 1 0 1 0 0 0 0 1
1 1 1 0 1 1 1 0 1 0
1 0 1 1 1 1 0 1 0 0
1 0 0 0 0 1 0 0 0 1
1 0 1 1 1 1 0 1 1 1
1 1 1 0 0 0 1 0 0 1
";

    fn open_grid() -> Grid {
        Grid::new(Dims::new(9, 10))
    }

    fn sample_grid() -> Grid {
        SAMPLE.parse().unwrap()
    }

    /// Asserts that `path` is a valid walk from `src` to `dst` on `grid`.
    fn assert_valid_path(grid: &Grid, path: &Path, src: Coord, dst: Coord) {
        assert_eq!(path.source(), src);
        assert_eq!(path.destination(), dst);
        let mut seen = HashSet::new();
        for &c in path {
            assert!(grid.is_passable(c), "{c} is not passable");
            assert!(seen.insert(c), "{c} repeats");
        }
        for w in path.cells().windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not one step", w[0], w[1]);
        }
    }

    fn expect_found(result: PathResult) -> Path {
        match result {
            PathResult::Found(path) => path,
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let g = open_grid();
        let (src, dst) = (Coord::new(8, 0), Coord::new(0, 9));
        let path = expect_found(search(&g, src, dst));
        assert_eq!(path.len(), 18);
        assert_eq!(path.cost(), 17);
        assert_valid_path(&g, &path, src, dst);
    }

    #[test]
    fn sample_grid_matches_bfs() {
        let g = sample_grid();
        let (src, dst) = (Coord::new(8, 0), Coord::new(0, 0));
        let path = expect_found(search(&g, src, dst));
        assert_eq!(bfs_map(&g, src).at(dst), Some(12));
        assert_eq!(path.cost(), 12);
        assert_valid_path(&g, &path, src, dst);
    }

    #[test]
    fn sample_grid_unreachable_region() {
        let g = sample_grid();
        assert_eq!(
            search(&g, Coord::new(8, 0), Coord::new(0, 9)),
            PathResult::NotFound
        );
    }

    #[test]
    fn enclosed_destination_is_not_found() {
        // (2, 7) is passable but walled in on all four sides.
        let g = sample_grid();
        assert!(g.is_passable(Coord::new(2, 7)));
        assert_eq!(
            search(&g, Coord::new(0, 0), Coord::new(2, 7)),
            PathResult::NotFound
        );
    }

    #[test]
    fn detour_around_wall_is_optimal() {
        // Wall down column 5 with a single gap at the bottom row.
        let mut g = open_grid();
        for row in 0..8 {
            g.set(Coord::new(row, 5), Cell::Blocked);
        }
        let (src, dst) = (Coord::new(0, 0), Coord::new(0, 9));
        let path = expect_found(search(&g, src, dst));
        // Down 8, across 9, up 8.
        assert_eq!(path.cost(), 25);
        assert!(path.cells().contains(&Coord::new(8, 5)));
        assert_valid_path(&g, &path, src, dst);
    }

    #[test]
    fn unique_corridor_path_is_exact() {
        let g: Grid = "\
1 1 1
0 0 1
1 1 1
"
        .parse()
        .unwrap();
        let path = expect_found(search(&g, Coord::new(0, 0), Coord::new(2, 0)));
        assert_eq!(
            path.into_cells(),
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
                Coord::new(2, 1),
                Coord::new(2, 0),
            ]
        );
    }

    #[test]
    fn out_of_bounds_source_and_destination() {
        let g = open_grid();
        let inside = Coord::new(4, 4);
        for bad in [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(9, 0),
            Coord::new(0, 10),
        ] {
            assert_eq!(
                search(&g, bad, inside),
                PathResult::InvalidCoordinate(Endpoint::Source)
            );
            assert_eq!(
                search(&g, inside, bad),
                PathResult::InvalidCoordinate(Endpoint::Destination)
            );
        }
        // Both bad: the source is reported first.
        assert_eq!(
            search(&g, Coord::new(9, 9), Coord::new(-3, 2)),
            PathResult::InvalidCoordinate(Endpoint::Source)
        );
    }

    #[test]
    fn bounds_are_checked_before_blockage() {
        let mut g = open_grid();
        g.set(Coord::new(0, 0), Cell::Blocked);
        assert_eq!(
            search(&g, Coord::new(0, 0), Coord::new(20, 0)),
            PathResult::InvalidCoordinate(Endpoint::Destination)
        );
    }

    #[test]
    fn blocked_endpoints_even_when_reachable() {
        let mut g = open_grid();
        g.set(Coord::new(3, 3), Cell::Blocked);
        assert_eq!(
            search(&g, Coord::new(3, 3), Coord::new(0, 0)),
            PathResult::BlockedEndpoint(Endpoint::Source)
        );
        assert_eq!(
            search(&g, Coord::new(0, 0), Coord::new(3, 3)),
            PathResult::BlockedEndpoint(Endpoint::Destination)
        );
    }

    #[test]
    fn same_cell_is_already_at_destination() {
        // Everything else blocked: the answer does not depend on the rest.
        let mut g = Grid::filled(Dims::new(9, 10), Cell::Blocked);
        let c = Coord::new(4, 4);
        g.set(c, Cell::Passable);
        let (result, stats) = PathFinder::new(&g).search_with_stats(c, c);
        assert_eq!(result, PathResult::AlreadyAtDestination(c));
        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn blocked_same_cell_is_blocked_not_trivial() {
        let mut g = open_grid();
        let c = Coord::new(1, 1);
        g.set(c, Cell::Blocked);
        assert_eq!(
            search(&g, c, c),
            PathResult::BlockedEndpoint(Endpoint::Source)
        );
    }

    #[test]
    fn every_cell_is_expanded_at_most_once() {
        let g = sample_grid();
        let finder = PathFinder::new(&g);
        let (result, stats) = finder.search_with_stats(Coord::new(8, 0), Coord::new(0, 9));
        assert_eq!(result, PathResult::NotFound);
        assert!(stats.expanded <= g.count_passable());
        // The frontier was drained, so every push was either expanded or skipped.
        assert_eq!(stats.pushed, stats.expanded + stats.stale);
    }

    #[test]
    fn improved_cell_leaves_a_stale_entry() {
        // (4, 3) is first reached from (4, 4) at g = 9, then improved to
        // g = 7 through (4, 2). Its old frontier entry must be skipped.
        let g: Grid = "\
1 0 0 0 1 0 0 1
1 0 1 0 0 1 1 0
1 1 1 1 1 1 1 1
1 1 0 0 1 1 0 1
0 1 1 1 1 0 1 1
"
        .parse()
        .unwrap();
        let (src, dst) = (Coord::new(0, 0), Coord::new(4, 6));
        let (result, stats) = PathFinder::new(&g).search_with_stats(src, dst);
        let path = expect_found(result);

        assert!(stats.stale > 0, "{stats:?}");
        assert!(stats.expanded <= g.count_passable());
        assert_eq!(bfs_map(&g, src).at(dst), Some(12));
        assert_eq!(path.cost(), 12);
        assert_valid_path(&g, &path, src, dst);
    }

    #[test]
    fn finder_is_reusable() {
        let g = sample_grid();
        let finder = PathFinder::new(&g);
        assert_eq!(finder.dims(), Dims::new(9, 10));
        let a = finder.search(Coord::new(8, 0), Coord::new(0, 0));
        let b = finder.search(Coord::new(8, 0), Coord::new(0, 0));
        assert_eq!(a, b);
        assert!(finder.search(Coord::new(0, 0), Coord::new(8, 0)).is_success());
    }

    #[test]
    fn random_grids_match_bfs() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        let dims = Dims::new(9, 10);
        for _ in 0..300 {
            let mut g = Grid::new(dims);
            for c in dims {
                if rng.random_bool(0.3) {
                    g.set(c, Cell::Blocked);
                }
            }
            let src = Coord::new(rng.random_range(0..dims.rows), rng.random_range(0..dims.cols));
            let dst = Coord::new(rng.random_range(0..dims.rows), rng.random_range(0..dims.cols));

            let result = search(&g, src, dst);
            if !g.is_passable(src) {
                assert_eq!(result, PathResult::BlockedEndpoint(Endpoint::Source));
                continue;
            }
            if !g.is_passable(dst) {
                assert_eq!(result, PathResult::BlockedEndpoint(Endpoint::Destination));
                continue;
            }
            if src == dst {
                assert_eq!(result, PathResult::AlreadyAtDestination(src));
                continue;
            }

            match (bfs_map(&g, src).at(dst), result) {
                (Some(d), PathResult::Found(path)) => {
                    assert_eq!(path.cost(), d as usize, "{src} -> {dst}\n{g}");
                    assert_valid_path(&g, &path, src, dst);
                }
                (None, PathResult::NotFound) => {}
                (d, r) => panic!("bfs {d:?} disagrees with {r:?} for {src} -> {dst}\n{g}"),
            }
        }
    }
}
