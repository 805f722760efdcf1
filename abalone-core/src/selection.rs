//! Selection building
//!
//! A selection is 1-3 pieces of one color lying on a single line with
//! adjacent members. It is rebuilt one cell at a time as the player clicks.

use crate::board::{Board, Direction, Hex};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most pieces a single move may carry
pub const MAX_SELECTION: usize = 3;

/// Why a cell could not be added to a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("cell is not occupied by the player's own piece")]
    NotOwnPiece,

    #[error("selection already holds {} pieces", MAX_SELECTION)]
    Full,

    #[error("cells must form a contiguous straight line")]
    NotInLine,

    #[error("cell is off the board")]
    OffBoard,

    #[error("cell is selected twice")]
    Duplicate,
}

/// Selected pieces, kept sorted in hex order
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Hex>", into = "Vec<Hex>")]
pub struct Selection {
    hexes: Vec<Hex>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from raw hexes, checking size and line shape.
    /// Ownership is not checked here.
    pub fn from_hexes(hexes: &[Hex]) -> Result<Self, SelectionError> {
        let sorted = sorted_members(hexes)?;
        if !is_line(&sorted) {
            return Err(SelectionError::NotInLine);
        }
        Ok(Self { hexes: sorted })
    }

    /// Rebuild a selection a client is still editing.
    ///
    /// Members must be `player`'s pieces but need not form a line, so a
    /// selection left gapped by a deselection can be repaired one cell at
    /// a time.
    pub fn from_members(hexes: &[Hex], board: &Board, player: Player) -> Result<Self, SelectionError> {
        let sorted = sorted_members(hexes)?;
        if !sorted.iter().all(|&hex| board.get(hex) == Some(player)) {
            return Err(SelectionError::NotOwnPiece);
        }
        Ok(Self { hexes: sorted })
    }

    /// Add `hex`, or remove it if already selected.
    ///
    /// Removal always succeeds, even when it leaves a gap in a
    /// three-piece line. On rejection `self` is left untouched.
    pub fn toggle(&self, hex: Hex, board: &Board, player: Player) -> Result<Selection, SelectionError> {
        if self.contains(hex) {
            let hexes = self.hexes.iter().copied().filter(|&h| h != hex).collect();
            return Ok(Selection { hexes });
        }
        if board.get(hex) != Some(player) {
            return Err(SelectionError::NotOwnPiece);
        }
        if self.hexes.len() >= MAX_SELECTION {
            return Err(SelectionError::Full);
        }

        let mut hexes = self.hexes.clone();
        hexes.push(hex);
        hexes.sort();
        if !is_line(&hexes) {
            return Err(SelectionError::NotInLine);
        }
        Ok(Selection { hexes })
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.hexes.contains(&hex)
    }

    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Positive line direction between consecutive members (2+ pieces)
    pub fn step(&self) -> Option<Direction> {
        match self.hexes.as_slice() {
            [first, second, ..] => first
                .direction_to(*second)
                .filter(|dir| dir.is_positive()),
            _ => None,
        }
    }

    /// Whether the members still form a valid line
    pub fn is_line(&self) -> bool {
        is_line(&self.hexes)
    }

    /// Leading member when moving in `dir`
    pub fn front(&self, dir: Direction) -> Option<Hex> {
        if dir.is_positive() {
            self.hexes.last().copied()
        } else {
            self.hexes.first().copied()
        }
    }

    /// True if every member belongs to `player`
    pub fn owned_by(&self, board: &Board, player: Player) -> bool {
        self.hexes.iter().all(|&hex| board.get(hex) == Some(player))
    }
}

/// Size, board and duplicate checks shared by the constructors
fn sorted_members(hexes: &[Hex]) -> Result<Vec<Hex>, SelectionError> {
    if hexes.len() > MAX_SELECTION {
        return Err(SelectionError::Full);
    }
    if !hexes.iter().all(Hex::is_valid) {
        return Err(SelectionError::OffBoard);
    }
    let mut sorted = hexes.to_vec();
    sorted.sort();
    sorted.dedup();
    if sorted.len() != hexes.len() {
        return Err(SelectionError::Duplicate);
    }
    Ok(sorted)
}

impl TryFrom<Vec<Hex>> for Selection {
    type Error = SelectionError;

    fn try_from(hexes: Vec<Hex>) -> Result<Self, Self::Error> {
        Selection::from_hexes(&hexes)
    }
}

impl From<Selection> for Vec<Hex> {
    fn from(selection: Selection) -> Self {
        selection.hexes
    }
}

/// Sorted hexes differ by one constant positive unit step
fn is_line(sorted: &[Hex]) -> bool {
    if sorted.len() > MAX_SELECTION {
        return false;
    }
    let Some(step) = sorted
        .first()
        .zip(sorted.get(1))
        .map(|(a, b)| a.direction_to(*b))
    else {
        return true;
    };
    match step {
        Some(dir) if dir.is_positive() => sorted.windows(2).all(|w| w[0].step(dir) == w[1]),
        _ => false,
    }
}
