//! Common types for Mathleship: coordinates, shot outcomes, errors.

use crate::bitgrid::GridError;
use crate::config::{column_letter, GRID_SIZE};
use core::fmt;

/// A cell position on the grid, integer-indexed on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Whether this position lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }
}

impl fmt::Display for Coord {
    /// Letter column and 1-based row, e.g. `C4`. Display only; identity
    /// stays integer-indexed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row + 1)
    }
}

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum ShotResult {
    /// Shot struck an undamaged ship segment.
    Hit,
    /// Shot struck open water.
    Miss,
    /// Cell was targeted before; nothing changed.
    AlreadyTargeted,
}

/// Full outcome of resolving one shot against a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitReport {
    pub result: ShotResult,
    pub ship_sunk: bool,
    pub match_won: bool,
}

/// Low-level outcome of marking a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitMark {
    /// The cell had been targeted before this call.
    pub already_targeted: bool,
    /// Index of the ship that absorbed a new hit, if any.
    pub ship: Option<usize>,
}

/// Errors returned by board and match operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Underlying mask error (invalid index).
    Grid(GridError),
    /// Shot coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Attempted to commit a placement that is not legal. Precondition
    /// violation, never retried.
    IllegalPlacement,
    /// No legal placement found within the retry ceiling; the fleet does
    /// not fit this grid.
    PlacementExhausted { length: usize },
    /// Shot submitted after the match was already won.
    MatchAlreadyFinished,
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Grid(e) => write!(f, "Grid error: {}", e),
            GameError::OutOfBounds { row, col } => {
                write!(
                    f,
                    "Coordinate ({}, {}) is outside the {}x{} grid",
                    row, col, GRID_SIZE, GRID_SIZE
                )
            }
            GameError::IllegalPlacement => {
                write!(f, "Placement is not legal on the current board")
            }
            GameError::PlacementExhausted { length } => {
                write!(f, "No legal placement found for a ship of length {}", length)
            }
            GameError::MatchAlreadyFinished => write!(f, "Match is already finished"),
        }
    }
}
