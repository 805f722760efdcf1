//! Move enumeration and push resolution
//!
//! Both entry points are pure: they read the board they are given and
//! return new values without touching shared state.

use crate::board::{Board, Direction, Hex};
use crate::player::{Player, Scores};
use crate::selection::Selection;
use serde::Serialize;

/// What a move does besides translating the selection
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveKind {
    /// Every target was empty or already selected
    Simple,
    /// Opponent run in front of the leading piece, nearest first
    Push { pushed: Vec<Hex> },
}

/// A legal translation of the current selection
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub direction: Direction,
    /// Selection hexes shifted one step, in hex order
    pub targets: Vec<Hex>,
    #[serde(flatten)]
    pub kind: MoveKind,
}

impl Move {
    pub fn is_push(&self) -> bool {
        matches!(self.kind, MoveKind::Push { .. })
    }

    pub fn pushed(&self) -> &[Hex] {
        match &self.kind {
            MoveKind::Simple => &[],
            MoveKind::Push { pushed } => pushed,
        }
    }

    /// Pushed pieces that will leave the board
    pub fn ejections(&self) -> usize {
        self.pushed()
            .iter()
            .filter(|hex| !hex.step(self.direction).is_valid())
            .count()
    }
}

/// Result of applying a move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub board: Board,
    pub scores: Scores,
    pub winner: Option<Player>,
}

// ============================================================================
// MOVE GENERATION
// ============================================================================

/// Enumerate the legal moves of `selection` for `player`.
///
/// Yields at most one move per direction, in [`Direction::ALL`] order. An
/// empty, broken or foreign selection has no moves.
pub fn compute_moves(board: &Board, selection: &Selection, player: Player) -> Vec<Move> {
    if selection.is_empty() || !selection.is_line() || !selection.owned_by(board, player) {
        return vec![];
    }

    Direction::ALL
        .iter()
        .filter_map(|&dir| move_in_direction(board, selection, player, dir))
        .collect()
}

/// The legal move of `selection` toward `dir`, if there is one
pub fn move_in_direction(
    board: &Board,
    selection: &Selection,
    player: Player,
    dir: Direction,
) -> Option<Move> {
    let targets: Vec<Hex> = selection.hexes().iter().map(|hex| hex.step(dir)).collect();
    if !targets.iter().all(Hex::is_valid) {
        return None;
    }

    let unobstructed = targets
        .iter()
        .all(|&hex| board.is_empty_at(hex) || selection.contains(hex));
    if unobstructed {
        return Some(Move {
            direction: dir,
            targets,
            kind: MoveKind::Simple,
        });
    }

    // Broadside pushes are not allowed
    let step = selection.step()?;
    if step.axis() != dir.axis() {
        return None;
    }

    let pushed = opponent_run(board, selection.front(dir)?, dir, player);
    if pushed.is_empty() || pushed.len() >= selection.len() {
        return None;
    }
    let beyond = pushed.last()?.step(dir);
    if beyond.is_valid() && !board.is_empty_at(beyond) {
        return None;
    }

    Some(Move {
        direction: dir,
        targets,
        kind: MoveKind::Push { pushed },
    })
}

/// Consecutive opponent pieces starting one step past `front`
fn opponent_run(board: &Board, front: Hex, dir: Direction, player: Player) -> Vec<Hex> {
    let opponent = player.opponent();
    let mut run = Vec::new();
    let mut cursor = front.step(dir);
    while cursor.is_valid() && board.get(cursor) == Some(opponent) {
        run.push(cursor);
        cursor = cursor.step(dir);
    }
    run
}

// ============================================================================
// MOVE APPLICATION
// ============================================================================

/// Apply `mv` for `player`, returning the new board, scores and winner.
///
/// Pushed pieces are resolved first, then the selection is lifted and
/// dropped onto its targets. Each piece pushed off the board scores one.
pub fn apply_move(
    board: &Board,
    mv: &Move,
    selection: &Selection,
    player: Player,
    scores: Scores,
) -> Outcome {
    let mut board = board.clone();
    let mut scores = scores;

    let pushed = mv.pushed();
    for &hex in pushed {
        board.clear(hex);
    }
    for &hex in pushed {
        let dest = hex.step(mv.direction);
        if dest.is_valid() {
            board.set(dest, player.opponent());
        } else {
            scores.record_ejection(player);
            tracing::debug!(?hex, %player, "piece ejected");
        }
    }

    for &hex in selection.hexes() {
        board.clear(hex);
    }
    for &hex in &mv.targets {
        board.set(hex, player);
    }

    Outcome {
        board,
        scores,
        winner: scores.winner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn hex(code: u8) -> Hex {
        Cell::try_from(code).unwrap().to_hex()
    }

    fn board_of(black: &[u8], white: &[u8]) -> Board {
        Board::from_pieces(
            black
                .iter()
                .map(|&c| (hex(c), Player::Black))
                .chain(white.iter().map(|&c| (hex(c), Player::White))),
        )
    }

    fn selection(codes: &[u8]) -> Selection {
        let hexes: Vec<Hex> = codes.iter().map(|&c| hex(c)).collect();
        Selection::from_hexes(&hexes).unwrap()
    }

    fn find(moves: &[Move], dir: Direction) -> Option<&Move> {
        moves.iter().find(|m| m.direction == dir)
    }

    #[test]
    fn test_single_piece_in_open_field() {
        let board = board_of(&[55], &[]);
        let moves = compute_moves(&board, &selection(&[55]), Player::Black);
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|m| m.kind == MoveKind::Simple));
    }

    #[test]
    fn test_no_wraparound_at_edge() {
        let board = board_of(&[59], &[]);
        let moves = compute_moves(&board, &selection(&[59]), Player::Black);
        assert!(find(&moves, Direction::E).is_none());
        assert!(find(&moves, Direction::NE).is_none());
        assert!(find(&moves, Direction::SE).is_none());
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_inline_slide_ignores_own_members() {
        let board = board_of(&[62, 63, 64], &[]);
        let moves = compute_moves(&board, &selection(&[62, 63, 64]), Player::Black);
        let east = find(&moves, Direction::E).unwrap();
        assert_eq!(east.kind, MoveKind::Simple);
        assert_eq!(east.targets, vec![hex(63), hex(64), hex(65)]);
    }

    #[test]
    fn test_worked_push_example() {
        let board = board_of(&[62, 63], &[64]);
        let sel = selection(&[62, 63]);
        let moves = compute_moves(&board, &sel, Player::Black);
        let push = find(&moves, Direction::E).unwrap();
        assert_eq!(push.pushed(), &[hex(64)]);
        assert_eq!(push.targets, vec![hex(63), hex(64)]);

        let outcome = apply_move(&board, push, &sel, Player::Black, Scores::default());
        assert_eq!(outcome.board, board_of(&[63, 64], &[65]));
        assert_eq!(outcome.scores, Scores::default());
        assert_eq!(outcome.winner, None);
    }

    #[test]
    fn test_equal_numbers_block() {
        let board = board_of(&[62, 63], &[64, 65]);
        let moves = compute_moves(&board, &selection(&[62, 63]), Player::Black);
        assert!(find(&moves, Direction::E).is_none());

        let board = board_of(&[61, 62, 63], &[64, 65, 66]);
        let moves = compute_moves(&board, &selection(&[61, 62, 63]), Player::Black);
        assert!(find(&moves, Direction::E).is_none());
    }

    #[test]
    fn test_three_push_two() {
        let board = board_of(&[61, 62, 63], &[64, 65]);
        let moves = compute_moves(&board, &selection(&[61, 62, 63]), Player::Black);
        let push = find(&moves, Direction::E).unwrap();
        assert_eq!(push.pushed(), &[hex(64), hex(65)]);
    }

    #[test]
    fn test_push_blocked_by_own_piece_behind() {
        let board = board_of(&[61, 62, 63, 65], &[64]);
        let moves = compute_moves(&board, &selection(&[61, 62, 63]), Player::Black);
        assert!(find(&moves, Direction::E).is_none());
    }

    #[test]
    fn test_push_blocked_by_own_piece_in_front() {
        let board = board_of(&[62, 63, 64], &[]);
        let moves = compute_moves(&board, &selection(&[62, 63]), Player::Black);
        assert!(find(&moves, Direction::E).is_none());
    }

    #[test]
    fn test_broadside_push_is_illegal() {
        // Line along the row, white piece directly below the front
        let board = board_of(&[52, 53], &[63]);
        let sel = selection(&[52, 53]);
        let moves = compute_moves(&board, &sel, Player::Black);
        let dest = hex(53).step(Direction::SE);
        assert_eq!(Cell::from_hex(dest).unwrap().code(), 63);
        assert!(find(&moves, Direction::SE).is_none());
        assert!(moves.iter().all(|m| !m.is_push()));
    }

    #[test]
    fn test_backward_push() {
        let board = board_of(&[62, 63], &[61]);
        let sel = selection(&[62, 63]);
        let moves = compute_moves(&board, &sel, Player::Black);
        let push = find(&moves, Direction::W).unwrap();
        assert_eq!(push.pushed(), &[hex(61)]);
        assert_eq!(push.ejections(), 1);
    }

    #[test]
    fn test_ejection_scores_and_wins() {
        let board = board_of(&[62, 63], &[61]);
        let sel = selection(&[62, 63]);
        let moves = compute_moves(&board, &sel, Player::Black);
        let push = find(&moves, Direction::W).unwrap();

        let outcome = apply_move(&board, push, &sel, Player::Black, Scores::new(5, 2));
        assert_eq!(outcome.board, board_of(&[61, 62], &[]));
        assert_eq!(outcome.scores, Scores::new(6, 2));
        assert_eq!(outcome.winner, Some(Player::Black));
    }

    #[test]
    fn test_two_pushed_one_ejected() {
        // White pair at the row end, black trio behind
        let board = board_of(&[95, 94, 93], &[92, 91]);
        let sel = selection(&[93, 94, 95]);
        let push = move_in_direction(&board, &sel, Player::Black, Direction::W).unwrap();
        assert_eq!(push.pushed(), &[hex(92), hex(91)]);
        let outcome = apply_move(&board, &push, &sel, Player::Black, Scores::default());
        assert_eq!(outcome.board, board_of(&[92, 93, 94], &[91]));
        assert_eq!(outcome.scores.black, 1);
    }

    #[test]
    fn test_foreign_or_broken_selection_has_no_moves() {
        let board = board_of(&[55], &[56]);
        assert!(compute_moves(&board, &selection(&[56]), Player::Black).is_empty());
        assert!(compute_moves(&board, &Selection::new(), Player::Black).is_empty());

        let board = board_of(&[54, 55, 56], &[]);
        let broken = selection(&[54, 55, 56])
            .toggle(hex(55), &board, Player::Black)
            .unwrap();
        assert!(compute_moves(&board, &broken, Player::Black).is_empty());
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        let board = board_of(&[61, 62, 63], &[64, 65]);
        let sel = selection(&[61, 62, 63]);
        let first = compute_moves(&board, &sel, Player::Black);
        let second = compute_moves(&board, &sel, Player::Black);
        assert_eq!(first, second);
    }
}
