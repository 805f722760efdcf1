//! Decimal `RC` cell codes used by stored snapshots.
//!
//! `R` is the row (1 = top, 9 = bottom) and `C` the column within that row
//! (1 = leftmost). Codes exist only at the serialization boundary; all
//! geometry is done on [`Hex`].

use crate::board::{row_bounds, Hex, BOARD_RADIUS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("cell code {0} is not on the board")]
    OffBoard(u8),

    #[error("cannot parse cell code {0:?}")]
    Parse(String),
}

/// A board cell in `RC` form (11..=95)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// Encode an on-board hex. Returns `None` for off-board hexes.
    pub fn from_hex(hex: Hex) -> Option<Cell> {
        if !hex.is_valid() {
            return None;
        }
        let row = (hex.r + BOARD_RADIUS + 1) as u8;
        let (q_min, _) = row_bounds(hex.r);
        let col = (hex.q - q_min + 1) as u8;
        Some(Cell(row * 10 + col))
    }

    pub fn to_hex(self) -> Hex {
        let r = (self.0 / 10) as i8 - BOARD_RADIUS - 1;
        let (q_min, _) = row_bounds(r);
        Hex::new(q_min + (self.0 % 10) as i8 - 1, r)
    }

    pub fn code(self) -> u8 {
        self.0
    }

    pub fn row(self) -> u8 {
        self.0 / 10
    }

    pub fn column(self) -> u8 {
        self.0 % 10
    }
}

impl TryFrom<u8> for Cell {
    type Error = CellError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let (row, col) = (code / 10, code % 10);
        if !(1..=9).contains(&row) || col == 0 {
            return Err(CellError::OffBoard(code));
        }
        let r = row as i8 - BOARD_RADIUS - 1;
        let (q_min, q_max) = row_bounds(r);
        if col as i8 > q_max - q_min + 1 {
            return Err(CellError::OffBoard(code));
        }
        Ok(Cell(code))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl From<Cell> for Hex {
    fn from(cell: Cell) -> Hex {
        cell.to_hex()
    }
}

impl FromStr for Cell {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u8 = s
            .trim()
            .parse()
            .map_err(|_| CellError::Parse(s.to_string()))?;
        Cell::try_from(code)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
