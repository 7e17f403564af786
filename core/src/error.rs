use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigViolation),
    #[error("Coordinates ({x}, {y}) are outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: Coord,
        y: Coord,
        cols: Coord,
        rows: Coord,
    },
}

/// The constraint a rejected configuration broke.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("rows value must be within 3 and 100 (inclusive), got {0}")]
    Rows(usize),
    #[error("columns value must be within 3 and 100 (inclusive), got {0}")]
    Columns(usize),
    #[error("number of mines must not be more than 20% ({mines} requested, at most {max})")]
    TooManyMines { mines: usize, max: usize },
    #[error("font size must be within 14 and 72 (inclusive), got {0}")]
    FontSize(u32),
}

pub type Result<T> = core::result::Result<T, BoardError>;
