//! Example to run the Abalone server standalone
//!
//! Run with: cargo run -p abalone-server --example run_server

use abalone_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting Abalone server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);
    println!("Open http://localhost:{}/api/game", config.port);

    run_server(config).await
}
