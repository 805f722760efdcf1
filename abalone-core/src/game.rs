//! Game state and turn handling

use crate::board::{Board, Direction, Hex};
use crate::layout::Layout;
use crate::player::{Player, Scores};
use crate::rules::{self, Move};
use crate::selection::{Selection, SelectionError};
use serde::{Deserialize, Serialize};

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
}

impl GameResult {
    pub fn from_winner(winner: Option<Player>) -> Self {
        match winner {
            None => GameResult::Ongoing,
            Some(Player::White) => GameResult::WhiteWins,
            Some(Player::Black) => GameResult::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Ongoing => None,
            GameResult::WhiteWins => Some(Player::White),
            GameResult::BlackWins => Some(Player::Black),
        }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state (clone to mutate)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    scores: Scores,
    /// Player to move
    turn: Player,
    result: GameResult,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game from a named layout. Black moves first.
    pub fn new(layout: Layout) -> Self {
        Self::from_parts(layout.board(), Scores::default(), Player::Black)
    }

    /// Assemble a state; the result is derived from the scores
    pub fn from_parts(board: Board, scores: Scores, turn: Player) -> Self {
        Self {
            board,
            scores,
            turn,
            result: GameResult::from_winner(scores.winner()),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Player to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    pub fn get_piece(&self, hex: Hex) -> Option<Player> {
        self.board.get(hex)
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Extend or shrink the selection of the player to move
    pub fn toggle_selection(
        &self,
        selection: &Selection,
        hex: Hex,
    ) -> Result<Selection, SelectionError> {
        selection.toggle(hex, &self.board, self.turn)
    }

    /// Legal moves of `selection` for the player to move
    pub fn legal_moves(&self, selection: &Selection) -> Vec<Move> {
        if self.is_over() {
            return vec![];
        }
        rules::compute_moves(&self.board, selection, self.turn)
    }

    /// The legal move toward `dir`, if any
    pub fn find_move(&self, selection: &Selection, dir: Direction) -> Option<Move> {
        self.legal_moves(selection)
            .into_iter()
            .find(|mv| mv.direction == dir)
    }

    /// Apply a move for the player to move and hand the turn over
    pub fn apply_move(&self, selection: &Selection, mv: &Move) -> Self {
        let outcome = rules::apply_move(&self.board, mv, selection, self.turn, self.scores);
        tracing::debug!(
            player = %self.turn,
            direction = mv.direction.name(),
            push = mv.is_push(),
            "move applied"
        );

        Self {
            board: outcome.board,
            scores: outcome.scores,
            turn: self.turn.opponent(),
            result: GameResult::from_winner(outcome.winner),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Layout::Standard)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn hex(code: u8) -> Hex {
        Cell::try_from(code).unwrap().to_hex()
    }

    fn select(game: &GameState, codes: &[u8]) -> Selection {
        codes.iter().fold(Selection::new(), |sel, &code| {
            game.toggle_selection(&sel, hex(code)).unwrap()
        })
    }

    #[test]
    fn test_game_creation() {
        let game = GameState::default();
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.result(), GameResult::Ongoing);
        assert_eq!(game.piece_count(Player::White), 14);
        assert_eq!(game.piece_count(Player::Black), 14);
    }

    #[test]
    fn test_opening_moves() {
        let game = GameState::default();
        // Middle of the black third row can advance
        let sel = select(&game, &[73, 74, 75]);
        let moves = game.legal_moves(&sel);
        assert!(moves.iter().any(|m| m.direction == Direction::NW));
        assert!(moves.iter().any(|m| m.direction == Direction::NE));
        assert!(moves.iter().all(|m| !m.is_push()));
    }

    #[test]
    fn test_turn_alternates() {
        let game = GameState::default();
        let sel = select(&game, &[73]);
        let mv = game.find_move(&sel, Direction::NW).unwrap();
        let next = game.apply_move(&sel, &mv);
        assert_eq!(next.turn(), Player::White);
        assert_eq!(next.get_piece(hex(73)), None);
        assert_eq!(next.get_piece(hex(63)), Some(Player::Black));

        let sel = select(&next, &[33]);
        let mv = next.find_move(&sel, Direction::SE).unwrap();
        assert_eq!(next.apply_move(&sel, &mv).turn(), Player::Black);
    }

    #[test]
    fn test_cannot_select_opponent() {
        let game = GameState::default();
        assert!(game.toggle_selection(&Selection::new(), hex(11)).is_err());
    }

    #[test]
    fn test_finished_game_has_no_moves() {
        let board = Board::from_pieces([(hex(55), Player::Black), (hex(56), Player::White)]);
        let game = GameState::from_parts(board, Scores::new(6, 0), Player::White);
        assert_eq!(game.result(), GameResult::BlackWins);
        let sel = Selection::from_hexes(&[hex(56)]).unwrap();
        assert!(game.legal_moves(&sel).is_empty());
    }

    #[test]
    fn test_winning_push() {
        let board = Board::from_pieces([
            (hex(62), Player::Black),
            (hex(63), Player::Black),
            (hex(61), Player::White),
        ]);
        let game = GameState::from_parts(board, Scores::new(5, 0), Player::Black);
        let sel = select(&game, &[62, 63]);
        let mv = game.find_move(&sel, Direction::W).unwrap();
        let next = game.apply_move(&sel, &mv);
        assert_eq!(next.scores(), Scores::new(6, 0));
        assert_eq!(next.winner(), Some(Player::Black));
        assert_eq!(next.turn(), Player::White);
    }
}
