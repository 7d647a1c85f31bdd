use std::path::PathBuf;

use clap::Parser;
use wayfind_core::GridConfig;
use wayfind_core::config::{DEFAULT_COLS, DEFAULT_ROWS};

/// Find a shortest four-way path between two cells of a 0/1 grid file.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Grid file: whitespace-separated rows of 0 (blocked) and 1 (passable).
    /// Prompted for when omitted.
    pub grid: Option<PathBuf>,

    /// File holding `src_row src_col dst_row dst_col`. Coordinates are
    /// prompted for when omitted.
    #[arg(short, long)]
    pub endpoints: Option<PathBuf>,

    /// Number of rows the grid must have
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: i32,

    /// Number of columns the grid must have
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: i32,

    /// Print the grid with the path drawn over it
    #[arg(short, long)]
    pub render: bool,
}

impl Args {
    /// Grid shape requested on the command line.
    pub fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.rows, self.cols)
    }
}
