//! API error type
//!
//! Every handler error becomes a JSON body `{ "error": message }` with a
//! matching status code.

use abalone_core::{Player, SelectionError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("game state lock was poisoned")]
    LockPoisoned,

    #[error("stale version {got}: game is at version {current}")]
    StaleVersion { got: u64, current: u64 },

    #[error("it is {turn}'s turn")]
    NotYourTurn { turn: Player },

    #[error("game is over")]
    GameOver,

    #[error("invalid selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("no legal move {direction} for this selection")]
    IllegalMove { direction: &'static str },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::StaleVersion { .. } => StatusCode::CONFLICT,
            ApiError::NotYourTurn { .. }
            | ApiError::GameOver
            | ApiError::Selection(_)
            | ApiError::IllegalMove { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
