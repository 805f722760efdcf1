//! Moves and apply commands - inspect and play moves on a snapshot file
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_moves(), run_apply() - orchestration
//! - Level 2: build_selection(), choose_move()
//! - Level 3: report_moves()
//! - Level 4: parsing and formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use abalone_core::{Cell, Direction, GameState, Hex, Move, Selection, Snapshot};

use crate::render::render_game;
use crate::show::load_game;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MovesArgs {
    /// Snapshot JSON file
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Selected cells, e.g. 73,74,75
    #[arg(long, value_delimiter = ',', required = true)]
    pub select: Vec<Cell>,

    /// Output moves as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Snapshot JSON file
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Selected cells, e.g. 73,74,75
    #[arg(long, value_delimiter = ',', required = true)]
    pub select: Vec<Cell>,

    /// Direction to move (E, SE, SW, W, NW, NE)
    #[arg(long, value_parser = parse_direction)]
    pub direction: Direction,

    /// Where to write the result (defaults to overwriting the input)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// A move as printed in JSON output
#[derive(Serialize)]
struct MoveReport {
    direction: Direction,
    push: bool,
    targets: Vec<Cell>,
    pushed: Vec<Cell>,
    ejects: usize,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run moves command
///
/// 1. Load the snapshot
/// 2. Build the selection for the player to move
/// 3. Report its legal moves
pub fn run_moves(args: MovesArgs) -> Result<()> {
    let game = load_game(&args.snapshot)?;
    let selection = build_selection(&game, &args.select)?;

    let moves = game.legal_moves(&selection);
    tracing::debug!("{} legal moves for {} pieces", moves.len(), selection.len());

    report_moves(&moves, args.json)
}

/// Run apply command
///
/// 1. Load the snapshot
/// 2. Build the selection and find the move in the requested direction
/// 3. Apply it and write the new snapshot
pub fn run_apply(args: ApplyArgs) -> Result<()> {
    let game = load_game(&args.snapshot)?;
    let selection = build_selection(&game, &args.select)?;
    let mv = choose_move(&game, &selection, args.direction)?;

    let next = game.apply_move(&selection, &mv);
    let output = args.output.unwrap_or(args.snapshot);
    Snapshot::from(&next)
        .save(&output)
        .with_context(|| format!("Failed to write snapshot: {}", output.display()))?;

    tracing::info!(
        "{} moved {} {} ({} ejected)",
        game.turn(),
        format_cells(selection.hexes()),
        mv.direction.name(),
        mv.ejections()
    );
    print!("{}", render_game(&next));
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Toggle each cell in turn, as a player clicking the board would
fn build_selection(game: &GameState, cells: &[Cell]) -> Result<Selection> {
    cells.iter().try_fold(Selection::new(), |selection, cell| {
        game.toggle_selection(&selection, cell.to_hex())
            .with_context(|| format!("Cannot select cell {} for {}", cell, game.turn()))
    })
}

fn choose_move(game: &GameState, selection: &Selection, direction: Direction) -> Result<Move> {
    if game.is_over() {
        anyhow::bail!("Game is already over");
    }
    game.find_move(selection, direction).with_context(|| {
        format!(
            "No legal move {} for {}",
            direction.name(),
            format_cells(selection.hexes())
        )
    })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn report_moves(moves: &[Move], json: bool) -> Result<()> {
    if json {
        let reports: Vec<MoveReport> = moves.iter().map(move_report).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if moves.is_empty() {
        println!("No legal moves for this selection");
        return Ok(());
    }
    for mv in moves {
        println!("{}", describe_move(mv));
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::from_name(s)
        .ok_or_else(|| format!("unknown direction {s:?} (use E, SE, SW, W, NW, NE)"))
}

fn move_report(mv: &Move) -> MoveReport {
    MoveReport {
        direction: mv.direction,
        push: mv.is_push(),
        targets: to_cells(&mv.targets),
        pushed: to_cells(mv.pushed()),
        ejects: mv.ejections(),
    }
}

fn describe_move(mv: &Move) -> String {
    let mut line = format!("{:<2} -> {}", mv.direction.name(), format_cells(&mv.targets));
    if mv.is_push() {
        line.push_str(&format!("  push {}", format_cells(mv.pushed())));
        if mv.ejections() > 0 {
            line.push_str("  (ejects)");
        }
    }
    line
}

fn to_cells(hexes: &[Hex]) -> Vec<Cell> {
    hexes.iter().filter_map(|&hex| Cell::from_hex(hex)).collect()
}

fn format_cells(hexes: &[Hex]) -> String {
    to_cells(hexes)
        .iter()
        .map(Cell::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

// ============================================================================
// TESTS
// ============================================================================
