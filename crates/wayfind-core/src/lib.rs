//! **wayfind-core**: grid types shared across the *wayfind* crates.
//!
//! This crate provides `(row, col)` coordinates, grid dimensions, a dense
//! passable/blocked [`Grid`], and the whitespace-separated `0`/`1` text
//! format grids are loaded from.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
mod parse;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Coord, Dims};
pub use grid::{Cell, Grid};
