use crate::geom::Dims;

/// Default number of grid rows.
pub const DEFAULT_ROWS: i32 = 9;
/// Default number of grid columns.
pub const DEFAULT_COLS: i32 = 10;

/// Shape a loaded grid must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub dims: Dims,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dims: Dims::new(DEFAULT_ROWS, DEFAULT_COLS),
        }
    }
}

impl GridConfig {
    /// Config for a `rows` × `cols` grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            dims: Dims::new(rows, cols),
        }
    }
}
