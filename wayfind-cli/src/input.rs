//! Reading the grid file and the two endpoints.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use wayfind_core::{Coord, Grid, GridConfig};

use crate::error::InputError;

pub const GRID_PROMPT: &str = "Enter the filename containing grid data: ";
pub const SOURCE_PROMPT: &str = "Enter source coordinates (row col): ";
pub const DESTINATION_PROMPT: &str = "Enter destination coordinates (row col): ";

/// Load a grid file, requiring the shape in `config`.
pub fn load_grid(path: &Path, config: GridConfig) -> Result<Grid, InputError> {
    let text = fs::read_to_string(path)?;
    let grid = Grid::parse(&text, Some(config.dims))?;
    log::info!("loaded {} grid from {}", grid.dims(), path.display());
    Ok(grid)
}

/// Write `prompt`, then read one line from `input` with the trailing
/// newline removed.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, InputError> {
    out.write_all(prompt.as_bytes())?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn parse_ints(text: &str) -> Result<Vec<i32>, InputError> {
    text.split_whitespace()
        .map(|t| t.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| InputError::Coordinates(text.trim().to_string()))
}

/// Parse `row col`.
pub fn parse_coord(text: &str) -> Result<Coord, InputError> {
    match parse_ints(text)?.as_slice() {
        &[row, col] => Ok(Coord::new(row, col)),
        _ => Err(InputError::Coordinates(text.trim().to_string())),
    }
}

/// Parse `src_row src_col dst_row dst_col`, the endpoints file format.
pub fn parse_endpoints(text: &str) -> Result<(Coord, Coord), InputError> {
    match parse_ints(text)?.as_slice() {
        &[sr, sc, dr, dc] => Ok((Coord::new(sr, sc), Coord::new(dr, dc))),
        _ => Err(InputError::Coordinates(text.trim().to_string())),
    }
}

/// Read the endpoints file.
pub fn load_endpoints(path: &Path) -> Result<(Coord, Coord), InputError> {
    let text = fs::read_to_string(path)?;
    parse_endpoints(&text)
}

/// Prompt for source and destination on `input`.
pub fn prompt_endpoints<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<(Coord, Coord), InputError> {
    let source = parse_coord(&prompt_line(input, out, SOURCE_PROMPT)?)?;
    let destination = parse_coord(&prompt_line(input, out, DESTINATION_PROMPT)?)?;
    Ok((source, destination))
}
