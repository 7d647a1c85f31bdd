//! A\* shortest-path search on passable/blocked grids.
//!
//! Movement is along the four cardinal directions at unit cost, and the
//! search is guided by the Euclidean distance to the destination, which is
//! admissible for this movement model, so every path returned is a
//! shortest one.
//!
//! - **A\*** search ([`PathFinder::search`], [`search`])
//! - **BFS** reference distance maps ([`bfs_map`])
//!
//! Searches run over anything implementing [`Terrain`]; [`Grid`] does.
//! Every outcome, including bad input, is a [`PathResult`] value:
//!
//! ```
//! use wayfind_core::{Coord, Dims, Grid};
//! use wayfind_paths::{PathResult, search};
//!
//! let grid = Grid::new(Dims::new(9, 10));
//! match search(&grid, Coord::new(8, 0), Coord::new(0, 9)) {
//!     PathResult::Found(path) => assert_eq!(path.cost(), 17),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! [`Grid`]: wayfind_core::Grid

mod astar;
mod bfs;
mod distance;
mod neighbors;
mod node;
mod result;
mod traits;

pub use astar::{PathFinder, search};
pub use bfs::{DistanceMap, bfs_map};
pub use distance::euclidean;
pub use neighbors::Neighbors;
pub use result::{EmptyPath, Endpoint, Path, PathResult, SearchStats};
pub use traits::Terrain;
