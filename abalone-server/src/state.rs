//! Server state management
//!
//! One authoritative game session. Every applied move or reset bumps the
//! version so clients can detect stale snapshots.

use crate::error::ApiError;
use abalone_core::{GameState, Layout};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The current game plus its version counter
#[derive(Clone, Debug)]
pub struct GameSession {
    pub version: u64,
    pub layout: Layout,
    pub game: GameState,
}

impl GameSession {
    pub fn new(layout: Layout) -> Self {
        Self {
            version: 0,
            layout,
            game: GameState::new(layout),
        }
    }

    /// Replace the game, keeping the version monotonic
    pub fn reset(&mut self, layout: Layout) {
        self.layout = layout;
        self.game = GameState::new(layout);
        self.version += 1;
    }

    /// Install the position after a move
    pub fn advance(&mut self, game: GameState) {
        self.game = game;
        self.version += 1;
    }
}

/// Server-wide shared state
pub struct ServerState {
    session: RwLock<GameSession>,
}

impl ServerState {
    pub fn new(layout: Layout) -> Self {
        Self {
            session: RwLock::new(GameSession::new(layout)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, GameSession>, ApiError> {
        self.session.read().map_err(|_| ApiError::LockPoisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, GameSession>, ApiError> {
        self.session.write().map_err(|_| ApiError::LockPoisoned)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}
