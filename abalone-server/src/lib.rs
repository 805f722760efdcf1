//! Abalone Server - HTTP API for two-player play
//!
//! This crate provides the web backend:
//! - REST API for selections, legal moves and move submission
//! - Versioned game snapshots with long-poll updates
//! - Static file serving for the board UI

mod error;
mod routes;
mod state;

use abalone_core::Layout;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use error::ApiError;
pub use state::{GameSession, ServerState};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub layout: Layout,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: "web".to_string(),
            layout: Layout::Standard,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board geometry
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/api/game", get(routes::game::get_game))
        .route("/api/game/poll", get(routes::game::poll_game))
        .route("/api/game/new", post(routes::game::new_game))
        .route("/api/game/select", post(routes::game::toggle_selection))
        .route("/api/game/moves", post(routes::game::list_moves))
        .route("/api/game/move", post(routes::game::make_move))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.layout));
    let router = create_router(&config, state);

    tracing::info!("Abalone server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);
    tracing::info!("Starting layout: {}", config.layout);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
