//! New command - write a starting snapshot

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use abalone_core::{GameState, Layout, Snapshot};

use crate::render::render_game;

#[derive(Args)]
pub struct NewArgs {
    /// Starting layout (standard, belgian-daisy)
    #[arg(long, default_value = "standard")]
    pub layout: Layout,

    /// Snapshot file to write
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,
}

/// Run new command
pub fn run(args: NewArgs) -> Result<()> {
    let game = GameState::new(args.layout);
    Snapshot::from(&game)
        .save(&args.output)
        .with_context(|| format!("Failed to write snapshot: {}", args.output.display()))?;

    tracing::info!("Wrote {} layout to {}", args.layout, args.output.display());
    print!("{}", render_game(&game));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::show::load_game;

    #[test]
    fn test_new_writes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("start.json");
        run(NewArgs {
            layout: Layout::Standard,
            output: output.clone(),
        })
        .unwrap();

        let game = load_game(&output).unwrap();
        assert_eq!(game.piece_count(abalone_core::Player::Black), 14);
        assert_eq!(game.piece_count(abalone_core::Player::White), 14);
    }
}
