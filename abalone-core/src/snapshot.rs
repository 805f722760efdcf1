//! Stored game snapshots
//!
//! The wire shape is a map from decimal cell code to color plus scalar
//! score and turn fields:
//!
//! ```json
//! { "board": { "11": "white", "95": "black" },
//!   "white_score": 0, "black_score": 0, "turn": "black", "winner": null }
//! ```
//!
//! Snapshots come from outside the process, so they are validated here
//! before a [`GameState`] is built from them.

use crate::board::Board;
use crate::cell::Cell;
use crate::game::GameState;
use crate::layout::PIECES_PER_SIDE;
use crate::player::{Player, Scores, WIN_SCORE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("{player} has {count} pieces on the board (max {})", PIECES_PER_SIDE)]
    TooManyPieces { player: Player, count: usize },

    #[error("{player} has {on_board} pieces left but {lost} already ejected")]
    PieceCountMismatch {
        player: Player,
        on_board: usize,
        lost: u8,
    },

    #[error("{player} score {score} exceeds {}", WIN_SCORE)]
    ScoreOutOfRange { player: Player, score: u8 },

    #[error("recorded winner {recorded:?} does not match scores (expected {expected:?})")]
    WinnerMismatch {
        recorded: Option<Player>,
        expected: Option<Player>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable game snapshot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: BTreeMap<Cell, Player>,
    pub white_score: u8,
    pub black_score: u8,
    pub turn: Player,
    #[serde(default)]
    pub winner: Option<Player>,
}

impl Snapshot {
    pub fn scores(&self) -> Scores {
        Scores::new(self.black_score, self.white_score)
    }

    /// Check the snapshot describes a reachable position
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let scores = self.scores();
        for player in [Player::Black, Player::White] {
            let score = scores.get(player);
            if score > WIN_SCORE {
                return Err(SnapshotError::ScoreOutOfRange { player, score });
            }

            let on_board = self.board.values().filter(|&&p| p == player).count();
            if on_board > PIECES_PER_SIDE {
                return Err(SnapshotError::TooManyPieces {
                    player,
                    count: on_board,
                });
            }
            let lost = scores.get(player.opponent());
            if on_board + lost as usize > PIECES_PER_SIDE {
                return Err(SnapshotError::PieceCountMismatch {
                    player,
                    on_board,
                    lost,
                });
            }
        }

        let expected = scores.winner();
        if self.winner != expected {
            return Err(SnapshotError::WinnerMismatch {
                recorded: self.winner,
                expected,
            });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate from a JSON file
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        let board = game
            .board()
            .pieces()
            .filter_map(|(hex, player)| Cell::from_hex(hex).map(|cell| (cell, player)))
            .collect();
        let scores = game.scores();
        Snapshot {
            board,
            white_score: scores.white,
            black_score: scores.black,
            turn: game.turn(),
            winner: game.winner(),
        }
    }
}

impl TryFrom<Snapshot> for GameState {
    type Error = SnapshotError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        snapshot.validate()?;
        let board = Board::from_pieces(
            snapshot
                .board
                .iter()
                .map(|(cell, &player)| (cell.to_hex(), player)),
        );
        Ok(GameState::from_parts(board, snapshot.scores(), snapshot.turn))
    }
}
