//! Named starting positions

use crate::board::{Board, Hex};
use crate::cell::Cell;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pieces each side starts with
pub const PIECES_PER_SIDE: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout {0:?} (expected standard or belgian-daisy)")]
pub struct LayoutError(pub String);

/// Opening setups
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// White fills rows 1-2 and the middle of row 3, black mirrors at the bottom
    #[default]
    Standard,
    /// Two hexagonal clusters per side on opposite flanks
    BelgianDaisy,
}

// Cell codes per layout: (white, black)
const STANDARD_WHITE: [u8; PIECES_PER_SIDE] = [11, 12, 13, 14, 15, 21, 22, 23, 24, 25, 26, 33, 34, 35];
const STANDARD_BLACK: [u8; PIECES_PER_SIDE] = [91, 92, 93, 94, 95, 81, 82, 83, 84, 85, 86, 73, 74, 75];

const DAISY_WHITE: [u8; PIECES_PER_SIDE] = [11, 12, 21, 22, 23, 32, 33, 75, 76, 84, 85, 86, 94, 95];
const DAISY_BLACK: [u8; PIECES_PER_SIDE] = [14, 15, 24, 25, 26, 35, 36, 72, 73, 81, 82, 83, 91, 92];

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Standard, Layout::BelgianDaisy];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Standard => "standard",
            Layout::BelgianDaisy => "belgian-daisy",
        }
    }

    /// Initial board for this layout
    pub fn board(self) -> Board {
        let (white, black) = match self {
            Layout::Standard => (&STANDARD_WHITE, &STANDARD_BLACK),
            Layout::BelgianDaisy => (&DAISY_WHITE, &DAISY_BLACK),
        };
        Board::from_pieces(
            placements(white, Player::White).chain(placements(black, Player::Black)),
        )
    }
}

fn placements(codes: &[u8], player: Player) -> impl Iterator<Item = (Hex, Player)> + '_ {
    codes
        .iter()
        .filter_map(|&code| Cell::try_from(code).ok())
        .map(move |cell| (cell.to_hex(), player))
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .iter()
            .copied()
            .find(|layout| layout.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LayoutError(s.to_string()))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    #[test]
    fn test_piece_counts() {
        for layout in Layout::ALL {
            let board = layout.board();
            assert_eq!(board.count(Player::White), PIECES_PER_SIDE, "{}", layout);
            assert_eq!(board.count(Player::Black), PIECES_PER_SIDE, "{}", layout);
        }
    }

    #[test]
    fn test_point_symmetry() {
        // Standard swaps colors through the center, the daisy keeps them
        for (layout, swaps) in [(Layout::Standard, true), (Layout::BelgianDaisy, false)] {
            let board = layout.board();
            for (hex, player) in board.pieces() {
                let mirror = Hex::new(-hex.q, -hex.r);
                let expected = if swaps { player.opponent() } else { player };
                assert_eq!(board.get(mirror), Some(expected), "{} {:?}", layout, hex);
            }
        }
    }

    #[test]
    fn test_daisy_clusters() {
        // Each daisy center is surrounded by six pieces of its color
        let board = Layout::BelgianDaisy.board();
        for (code, player) in [(22, Player::White), (25, Player::Black), (82, Player::Black), (85, Player::White)] {
            let center = Cell::try_from(code).unwrap().to_hex();
            assert_eq!(board.get(center), Some(player));
            for dir in Direction::ALL {
                assert_eq!(board.get(center.step(dir)), Some(player), "daisy {}", code);
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("belgian-daisy".parse::<Layout>(), Ok(Layout::BelgianDaisy));
        assert_eq!("Standard".parse::<Layout>(), Ok(Layout::Standard));
        assert!("german".parse::<Layout>().is_err());
    }
}
