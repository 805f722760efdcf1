//! Abalone Core - Rules engine
//!
//! This crate provides the core game logic:
//! - Board geometry (61-cell hex grid with axial coordinates)
//! - Decimal `RC` cell codes for stored snapshots
//! - Selection building (1-3 pieces in a line)
//! - Move enumeration and push resolution
//! - Game state, starting layouts and snapshot validation

pub mod board;
pub mod cell;
pub mod game;
pub mod layout;
pub mod player;
pub mod rules;
pub mod selection;
pub mod snapshot;

// Re-exports for convenient access
pub use board::{all_hexes, row_bounds, Axis, Board, Direction, Hex, BOARD_RADIUS, CELL_COUNT};
pub use cell::{Cell, CellError};
pub use game::{GameResult, GameState};
pub use layout::{Layout, LayoutError, PIECES_PER_SIDE};
pub use player::{Player, Scores, WIN_SCORE};
pub use rules::{apply_move, compute_moves, Move, MoveKind, Outcome};
pub use selection::{Selection, SelectionError, MAX_SELECTION};
pub use snapshot::{Snapshot, SnapshotError};
