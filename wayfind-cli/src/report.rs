//! Human-readable output for search outcomes.

use std::io::{self, Write};

use wayfind_core::{Coord, Grid};
use wayfind_paths::{Endpoint, Path, PathResult};

/// One-line message for an outcome.
pub fn message(result: &PathResult) -> &'static str {
    match result {
        PathResult::InvalidCoordinate(Endpoint::Source) => "Source is out of range",
        PathResult::InvalidCoordinate(Endpoint::Destination) => "Destination is out of range",
        PathResult::BlockedEndpoint(Endpoint::Source) => "Source is blocked",
        PathResult::BlockedEndpoint(Endpoint::Destination) => "Destination is blocked",
        PathResult::AlreadyAtDestination(_) => "We are already at the destination",
        PathResult::Found(_) => "The destination cell is found",
        PathResult::NotFound => "Failed to find the destination cell",
    }
}

/// Write the outcome message and, for a found path, the arrow trace.
pub fn write_report<W: Write>(out: &mut W, result: &PathResult) -> io::Result<()> {
    writeln!(out, "{}", message(result))?;
    if let PathResult::Found(path) = result {
        writeln!(out)?;
        writeln!(out, "The Path is {path}")?;
    }
    Ok(())
}

/// Draw `grid` with `path` over it: `*` on the path, `#` blocked, `.` open.
pub fn render(grid: &Grid, path: &Path) -> String {
    let dims = grid.dims();
    let mut s = String::with_capacity(dims.len() * 2 + dims.rows as usize);
    for row in 0..dims.rows {
        for col in 0..dims.cols {
            let c = Coord::new(row, col);
            let ch = if path.cells().contains(&c) {
                '*'
            } else if grid.is_passable(c) {
                '.'
            } else {
                '#'
            };
            s.push(ch);
        }
        s.push('\n');
    }
    s
}
