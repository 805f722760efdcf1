//! Player colors and ejection scores

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ejections needed to win
pub const WIN_SCORE: u8 = 6;

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::White => "white",
        }
    }

    /// Parse `"black"` / `"white"`, case-insensitive
    pub fn from_name(name: &str) -> Option<Player> {
        match name.to_ascii_lowercase().as_str() {
            "black" | "b" => Some(Player::Black),
            "white" | "w" => Some(Player::White),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opponent pieces ejected by each player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub black: u8,
    pub white: u8,
}

impl Scores {
    pub fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Credit one ejection to `player`
    pub fn record_ejection(&mut self, player: Player) {
        let score = match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        };
        *score = score.saturating_add(1);
    }

    /// White is checked first when both have reached the threshold
    pub fn winner(&self) -> Option<Player> {
        if self.white >= WIN_SCORE {
            Some(Player::White)
        } else if self.black >= WIN_SCORE {
            Some(Player::Black)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_winner_threshold() {
        assert_eq!(Scores::new(5, 5).winner(), None);
        assert_eq!(Scores::new(6, 0).winner(), Some(Player::Black));
        assert_eq!(Scores::new(0, 6).winner(), Some(Player::White));
        assert_eq!(Scores::new(6, 6).winner(), Some(Player::White));
    }

    #[test]
    fn test_record_ejection() {
        let mut scores = Scores::default();
        scores.record_ejection(Player::White);
        scores.record_ejection(Player::White);
        assert_eq!(scores.get(Player::White), 2);
        assert_eq!(scores.get(Player::Black), 0);
    }

    #[test]
    fn test_player_names() {
        assert_eq!(serde_json::to_string(&Player::Black).unwrap(), r#""black""#);
        assert_eq!(Player::from_name("WHITE"), Some(Player::White));
        assert_eq!(Player::from_name("red"), None);
    }
}
