//! Status endpoint: server build plus a summary of the live game

use crate::error::ApiResult;
use crate::state::ServerState;
use abalone_core::{GameResult, Layout, Player, Scores};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub server_version: &'static str,
    pub game_version: u64,
    pub layout: Layout,
    pub turn: Player,
    pub scores: Scores,
    pub result: GameResult,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> ApiResult<StatusResponse> {
    let session = state.read()?;
    let game = &session.game;

    Ok(Json(StatusResponse {
        status: "ok",
        server_version: env!("CARGO_PKG_VERSION"),
        game_version: session.version,
        layout: session.layout,
        turn: game.turn(),
        scores: game.scores(),
        result: game.result(),
    }))
}
