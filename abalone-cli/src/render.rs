//! Text board diagram
//!
//! Rows are offset by half a cell so the hexagon shape shows:
//!
//! ```text
//! 1      ○ ○ ○ ○ ○
//! 2     ○ ○ ○ ○ ○ ○
//! ```

use abalone_core::{row_bounds, GameState, Hex, Player, BOARD_RADIUS};

const BLACK: char = '●';
const WHITE: char = '○';
const EMPTY: char = '·';

/// Render the board with row numbers, then scores and turn
pub fn render_game(game: &GameState) -> String {
    let mut out = String::new();

    for (index, r) in (-BOARD_RADIUS..=BOARD_RADIUS).enumerate() {
        let (q_min, q_max) = row_bounds(r);
        let indent = r.unsigned_abs() as usize;
        let cells: Vec<String> = (q_min..=q_max)
            .map(|q| symbol(game.get_piece(Hex::new(q, r))).to_string())
            .collect();
        out.push_str(&format!("{} {}{}\n", index + 1, " ".repeat(indent + 1), cells.join(" ")));
    }

    let scores = game.scores();
    out.push_str(&format!(
        "\n{} black {}   {} white {}\n",
        BLACK, scores.black, WHITE, scores.white
    ));
    match game.winner() {
        Some(winner) => out.push_str(&format!("{} wins\n", winner)),
        None => out.push_str(&format!("{} to move\n", game.turn())),
    }
    out
}

fn symbol(piece: Option<Player>) -> char {
    match piece {
        Some(Player::Black) => BLACK,
        Some(Player::White) => WHITE,
        None => EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abalone_core::Layout;

    #[test]
    fn test_render_standard() {
        let text = render_game(&GameState::new(Layout::Standard));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1      ○ ○ ○ ○ ○");
        assert_eq!(lines[4], "5  · · · · · · · · ·");
        assert_eq!(lines[8], "9      ● ● ● ● ●");
        assert!(text.contains("black to move"));
    }
}
