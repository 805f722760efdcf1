//! Show command - print a snapshot as a board diagram

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use abalone_core::{GameState, Snapshot};

use crate::render::render_game;

#[derive(Args)]
pub struct ShowArgs {
    /// Snapshot JSON file
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,
}

/// Run show command
pub fn run(args: ShowArgs) -> Result<()> {
    let game = load_game(&args.snapshot)?;
    print!("{}", render_game(&game));
    Ok(())
}

/// Load and validate a snapshot file into a game
pub fn load_game(path: &Path) -> Result<GameState> {
    let snapshot = Snapshot::load(path)
        .with_context(|| format!("Failed to load snapshot: {}", path.display()))?;
    let game = GameState::try_from(snapshot)
        .with_context(|| format!("Invalid snapshot: {}", path.display()))?;
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use abalone_core::Layout;
    use std::io::Write;

    #[test]
    fn test_load_game_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let game = GameState::new(Layout::BelgianDaisy);
        Snapshot::from(&game).save(&path).unwrap();

        let loaded = load_game(&path).unwrap();
        assert_eq!(loaded.board(), game.board());
        assert_eq!(loaded.turn(), game.turn());
    }

    #[test]
    fn test_load_game_rejects_bad_scores() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"board": {{}}, "white_score": 9, "black_score": 0, "turn": "black"}}"#
        )
        .unwrap();
        assert!(load_game(file.path()).is_err());
    }

    #[test]
    fn test_load_game_missing_file() {
        let err = load_game(Path::new("/nonexistent/game.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to load snapshot"));
    }
}
