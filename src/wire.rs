#![cfg(feature = "std")]

//! Boundary DTOs matching the platform's JSON shape.
//!
//! Columns are rendered as uppercase letters and ship presence as 0/1
//! integers here and nowhere else; core types stay integer-indexed.

use serde::{Deserialize, Serialize};

use crate::common::{HitReport, ShotResult};
use crate::config::column_letter;
use crate::ship::Ship;

/// One occupied cell as the platform expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub row: usize,
    pub column: char,
    pub has_ship: u8,
    pub is_hit: u8,
}

/// A placed ship as returned by board initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipView {
    pub size: usize,
    pub hit_count: usize,
    pub cells_occupied: Vec<CellView>,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        ShipView {
            size: ship.length(),
            hit_count: ship.hit_count(),
            cells_occupied: ship
                .cells()
                .iter()
                .map(|&cell| CellView {
                    row: cell.row,
                    column: column_letter(cell.col),
                    has_ship: 1,
                    is_hit: ship.cell_hit(cell) as u8,
                })
                .collect(),
        }
    }
}

/// Outcome of one resolved shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotView {
    pub result: ShotResult,
    pub ship_sunk: bool,
    pub match_won: bool,
}

impl From<HitReport> for ShotView {
    fn from(report: HitReport) -> Self {
        ShotView {
            result: report.result,
            ship_sunk: report.ship_sunk,
            match_won: report.match_won,
        }
    }
}
