//! Abalone CLI - Command-line interface
//!
//! Commands:
//! - new: Write a starting snapshot
//! - show: Print a snapshot as a board diagram
//! - moves: List legal moves for a selection
//! - apply: Play one move on a snapshot file
//! - serve: Start the HTTP game server

mod moves_cmd;
mod new_cmd;
mod render;
mod server;
mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "abalone")]
#[command(about = "Abalone rules engine and game server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starting snapshot
    New(new_cmd::NewArgs),
    /// Print a snapshot as a board diagram
    Show(show::ShowArgs),
    /// List legal moves for a selection
    Moves(moves_cmd::MovesArgs),
    /// Play one move on a snapshot file
    Apply(moves_cmd::ApplyArgs),
    /// Start the HTTP game server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New(args) => new_cmd::run(args),
        Commands::Show(args) => show::run(args),
        Commands::Moves(args) => moves_cmd::run_moves(args),
        Commands::Apply(args) => moves_cmd::run_apply(args),
        Commands::Serve(args) => server::run(args),
    }
}
