//! Board geometry endpoint

use abalone_core::{all_hexes, Cell, Direction, BOARD_RADIUS};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct CellInfo {
    pub cell: Cell,
    pub q: i8,
    pub r: i8,
}

#[derive(Serialize)]
pub struct DirectionInfo {
    pub name: &'static str,
    pub delta: [i8; 2],
}

#[derive(Serialize)]
pub struct BoardInfo {
    pub radius: i8,
    pub cells: Vec<CellInfo>,
    pub directions: Vec<DirectionInfo>,
}

/// Get board geometry
pub async fn get_board() -> Json<BoardInfo> {
    let cells = all_hexes()
        .iter()
        .filter_map(|&hex| {
            Cell::from_hex(hex).map(|cell| CellInfo {
                cell,
                q: hex.q,
                r: hex.r,
            })
        })
        .collect();

    let directions = Direction::ALL
        .iter()
        .map(|dir| {
            let (dq, dr) = dir.delta();
            DirectionInfo {
                name: dir.name(),
                delta: [dq, dr],
            }
        })
        .collect();

    Json(BoardInfo {
        radius: BOARD_RADIUS,
        cells,
        directions,
    })
}
