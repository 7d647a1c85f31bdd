use std::fmt;
use std::io;

use wayfind_core::GridError;

/// Errors raised while gathering the grid and endpoints from the user.
#[derive(Debug)]
pub enum InputError {
    /// Reading a file or the terminal failed.
    Io(io::Error),
    /// The grid file is malformed.
    Grid(GridError),
    /// A coordinate line could not be read as integers.
    Coordinates(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Coordinates(s) => write!(f, "invalid coordinates \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Coordinates(_) => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for InputError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
