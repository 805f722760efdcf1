//! Game API endpoints
//!
//! The server owns the authoritative game. Clients read versioned
//! snapshots, build selections, and submit moves tagged with the version
//! they were computed against.

use crate::error::{ApiError, ApiResult};
use crate::state::{GameSession, ServerState};
use abalone_core::{Cell, Direction, GameState, Hex, Layout, Move, MoveKind, Player, Selection, Snapshot};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Long-poll checks and spacing (5 seconds total)
const POLL_ATTEMPTS: u32 = 50;
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// RESPONSE TYPES
// ============================================================================

#[derive(Serialize)]
pub struct SessionResponse {
    pub version: u64,
    pub layout: Layout,
    pub snapshot: Snapshot,
}

impl From<&GameSession> for SessionResponse {
    fn from(session: &GameSession) -> Self {
        Self {
            version: session.version,
            layout: session.layout,
            snapshot: Snapshot::from(&session.game),
        }
    }
}

#[derive(Serialize)]
pub struct PollResponse {
    pub reload: bool,
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
}

#[derive(Serialize)]
pub struct SelectionResponse {
    pub selection: Vec<Cell>,
}

/// A move in wire coordinates
#[derive(Serialize)]
pub struct MoveInfo {
    pub direction: Direction,
    pub kind: &'static str,
    pub targets: Vec<Cell>,
    pub pushed: Vec<Cell>,
    pub ejects: usize,
}

impl From<&Move> for MoveInfo {
    fn from(mv: &Move) -> Self {
        Self {
            direction: mv.direction,
            kind: match mv.kind {
                MoveKind::Simple => "simple",
                MoveKind::Push { .. } => "push",
            },
            targets: to_cells(&mv.targets),
            pushed: to_cells(mv.pushed()),
            ejects: mv.ejections(),
        }
    }
}

#[derive(Serialize)]
pub struct MovesResponse {
    pub player: Player,
    pub moves: Vec<MoveInfo>,
}

// ============================================================================
// READ ENDPOINTS
// ============================================================================

/// Get the current game
pub async fn get_game(State(state): State<Arc<ServerState>>) -> ApiResult<SessionResponse> {
    let session = state.read()?;
    Ok(Json(SessionResponse::from(&*session)))
}

/// Poll query params
#[derive(Deserialize)]
pub struct PollParams {
    pub version: Option<u64>,
}

/// Long-poll for a version different from the client's
pub async fn poll_game(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<PollParams>,
) -> ApiResult<PollResponse> {
    let client_version = params.version.unwrap_or(0);

    for _ in 0..POLL_ATTEMPTS {
        {
            let session = state.read()?;
            if session.version != client_version {
                return Ok(Json(PollResponse {
                    reload: true,
                    version: session.version,
                    snapshot: Some(Snapshot::from(&session.game)),
                }));
            }
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }

    let session = state.read()?;
    Ok(Json(PollResponse {
        reload: false,
        version: session.version,
        snapshot: None,
    }))
}

// ============================================================================
// SELECTION & MOVES
// ============================================================================

#[derive(Deserialize)]
pub struct SelectRequest {
    #[serde(default)]
    pub selection: Vec<Cell>,
    pub cell: Cell,
    /// Defaults to the player to move
    pub player: Option<Player>,
}

/// Toggle one cell in a selection
pub async fn toggle_selection(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<SelectRequest>,
) -> ApiResult<SelectionResponse> {
    let session = state.read()?;
    let game = &session.game;
    let player = req.player.unwrap_or(game.turn());

    // A gapped selection left by a deselection is still editable
    let selection = Selection::from_members(&to_hexes(&req.selection), game.board(), player)?;
    let selection = selection.toggle(req.cell.to_hex(), game.board(), player)?;

    Ok(Json(SelectionResponse {
        selection: to_cells(selection.hexes()),
    }))
}

#[derive(Deserialize)]
pub struct MovesRequest {
    pub selection: Vec<Cell>,
}

/// Legal moves of a selection for the player to move
pub async fn list_moves(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MovesRequest>,
) -> ApiResult<MovesResponse> {
    let session = state.read()?;
    let selection = Selection::from_hexes(&to_hexes(&req.selection))?;
    let moves = session.game.legal_moves(&selection);

    Ok(Json(MovesResponse {
        player: session.game.turn(),
        moves: moves.iter().map(MoveInfo::from).collect(),
    }))
}

#[derive(Deserialize)]
pub struct MoveRequest {
    /// Version the client computed this move against
    pub version: u64,
    pub player: Player,
    pub selection: Vec<Cell>,
    pub direction: Direction,
}

/// Apply a move if the client's view is current and the move is legal
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> ApiResult<SessionResponse> {
    let mut session = state.write()?;

    if req.version != session.version {
        return Err(ApiError::StaleVersion {
            got: req.version,
            current: session.version,
        });
    }
    let next = play(&session.game, &req)?;
    session.advance(next);

    tracing::info!(
        version = session.version,
        player = %req.player,
        direction = req.direction.name(),
        "move accepted"
    );
    if let Some(winner) = session.game.winner() {
        tracing::info!(%winner, "game over");
    }

    Ok(Json(SessionResponse::from(&*session)))
}

/// Validate a move request against the game and apply it
fn play(game: &GameState, req: &MoveRequest) -> Result<GameState, ApiError> {
    if game.is_over() {
        return Err(ApiError::GameOver);
    }
    if req.player != game.turn() {
        return Err(ApiError::NotYourTurn { turn: game.turn() });
    }

    let selection = Selection::from_hexes(&to_hexes(&req.selection))?;
    let mv = game
        .find_move(&selection, req.direction)
        .ok_or(ApiError::IllegalMove {
            direction: req.direction.name(),
        })?;
    Ok(game.apply_move(&selection, &mv))
}

#[derive(Deserialize, Default)]
pub struct NewGameRequest {
    pub layout: Option<Layout>,
}

/// Start a new game, optionally with a different layout
pub async fn new_game(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<NewGameRequest>,
) -> ApiResult<SessionResponse> {
    let mut session = state.write()?;
    let layout = req.layout.unwrap_or(session.layout);
    session.reset(layout);

    tracing::info!(version = session.version, %layout, "new game");
    Ok(Json(SessionResponse::from(&*session)))
}

// ============================================================================
// HELPERS
// ============================================================================

fn to_hexes(cells: &[Cell]) -> Vec<Hex> {
    cells.iter().map(|cell| cell.to_hex()).collect()
}

fn to_cells(hexes: &[Hex]) -> Vec<Cell> {
    hexes.iter().filter_map(|&hex| Cell::from_hex(hex)).collect()
}
