//! Hex board geometry with axial coordinates

use crate::player::Player;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Board radius (distance from center to edge)
pub const BOARD_RADIUS: i8 = 4;

/// Number of cells on the board
pub const CELL_COUNT: usize = 61;

/// Cells per row, top to bottom
pub const ROW_LENGTHS: [u8; 9] = [5, 6, 7, 8, 9, 8, 7, 6, 5];

/// Axial hex coordinates.
///
/// `r` is the row (top = -4), `q` runs left to right within a row.
/// Hexes order row-major: by `r`, then by `q`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// Check if this hex is on the board. Total over all `i8` pairs.
    pub fn is_valid(&self) -> bool {
        let (q, r) = (i16::from(self.q), i16::from(self.r));
        let radius = i16::from(BOARD_RADIUS);
        q.abs() <= radius && r.abs() <= radius && (q + r).abs() <= radius
    }

    /// Distance from center (0,0)
    pub fn distance_to_center(&self) -> i8 {
        (self.q.abs() + self.r.abs() + (self.q + self.r).abs()) / 2
    }

    /// Hex one step away in `dir`. May be off the board.
    pub fn step(&self, dir: Direction) -> Hex {
        let (dq, dr) = dir.delta();
        Hex::new(self.q + dq, self.r + dr)
    }

    /// On-board neighbor in `dir`, if any
    pub fn neighbor(&self, dir: Direction) -> Option<Hex> {
        let next = self.step(dir);
        next.is_valid().then_some(next)
    }

    /// All on-board neighbors (3 for corners, 4 for other edge cells, 6 inside)
    pub fn neighbors(&self) -> Vec<Hex> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.neighbor(dir))
            .collect()
    }

    /// Direction leading from `self` to an adjacent `other`
    pub fn direction_to(&self, other: Hex) -> Option<Direction> {
        let delta = (other.q - self.q, other.r - self.r);
        Direction::ALL.iter().copied().find(|d| d.delta() == delta)
    }
}

impl Ord for Hex {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.r, self.q).cmp(&(other.r, other.q))
    }
}

impl PartialOrd for Hex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The six axial step directions (pointy-top, rows grow downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    E,
    SE,
    SW,
    W,
    NW,
    NE,
}

/// Line axis shared by a direction and its opposite
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// E / W
    Horizontal,
    /// SE / NW
    Falling,
    /// SW / NE
    Rising,
}

impl Direction {
    /// All directions: the three positive ones first, then their opposites
    pub const ALL: [Direction; 6] = [
        Direction::E,
        Direction::SE,
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::NE,
    ];

    /// Directions that move forward in hex order (one per axis)
    pub const POSITIVE: [Direction; 3] = [Direction::E, Direction::SE, Direction::SW];

    /// Axial delta (dq, dr)
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::E => (1, 0),
            Direction::SE => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (0, -1),
            Direction::NE => (1, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
            Direction::NE => Direction::SW,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::E | Direction::W => Axis::Horizontal,
            Direction::SE | Direction::NW => Axis::Falling,
            Direction::SW | Direction::NE => Axis::Rising,
        }
    }

    /// True if stepping this way increases hex order
    pub const fn is_positive(self) -> bool {
        matches!(self, Direction::E | Direction::SE | Direction::SW)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
            Direction::NE => "NE",
        }
    }

    /// Parse a compass name, case-insensitive
    pub fn from_name(name: &str) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

/// Column range `q_min..=q_max` of row `r`
pub fn row_bounds(r: i8) -> (i8, i8) {
    let q_min = (-BOARD_RADIUS).max(-BOARD_RADIUS - r);
    let q_max = BOARD_RADIUS.min(BOARD_RADIUS - r);
    (q_min, q_max)
}

/// All 61 board cells in hex order
pub fn all_hexes() -> &'static [Hex] {
    static HEXES: OnceLock<Vec<Hex>> = OnceLock::new();
    HEXES.get_or_init(|| {
        let mut hexes = Vec::with_capacity(CELL_COUNT);
        for r in -BOARD_RADIUS..=BOARD_RADIUS {
            let (q_min, q_max) = row_bounds(r);
            for q in q_min..=q_max {
                hexes.push(Hex::new(q, r));
            }
        }
        hexes
    })
}

// ============================================================================
// OCCUPANCY
// ============================================================================

/// Board occupancy: hex -> owner (sparse, missing = empty)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: FxHashMap<Hex, Player>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from placements. Off-board hexes are dropped.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Hex, Player)>,
    {
        let mut board = Board::new();
        for (hex, player) in pieces {
            board.set(hex, player);
        }
        board
    }

    pub fn get(&self, hex: Hex) -> Option<Player> {
        self.cells.get(&hex).copied()
    }

    pub fn is_empty_at(&self, hex: Hex) -> bool {
        !self.cells.contains_key(&hex)
    }

    /// Place a piece; ignored for off-board hexes
    pub fn set(&mut self, hex: Hex, player: Player) {
        if hex.is_valid() {
            self.cells.insert(hex, player);
        }
    }

    /// Remove whatever occupies `hex`
    pub fn clear(&mut self, hex: Hex) -> Option<Player> {
        self.cells.remove(&hex)
    }

    /// Iterate pieces on board (unordered)
    pub fn pieces(&self) -> impl Iterator<Item = (Hex, Player)> + '_ {
        self.cells.iter().map(|(&hex, &player)| (hex, player))
    }

    /// Pieces owned by `player`, in hex order
    pub fn hexes_of(&self, player: Player) -> Vec<Hex> {
        let mut hexes: Vec<Hex> = self
            .pieces()
            .filter(|&(_, owner)| owner == player)
            .map(|(hex, _)| hex)
            .collect();
        hexes.sort();
        hexes
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.values().filter(|&&owner| owner == player).count()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
