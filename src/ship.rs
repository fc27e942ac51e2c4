//! Placed ships and per-ship damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::bitgrid::BitGrid;
use crate::common::{Coord, GameError};
use crate::config::GRID_SIZE;

/// Cell mask sized to the game grid.
pub type Mask = BitGrid<u64, GRID_SIZE>;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `i` steps from `start` along this orientation.
    pub fn step(&self, start: Coord, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(start.row, start.col + i),
            Orientation::Vertical => Coord::new(start.row + i, start.col),
        }
    }
}

/// A ship committed to the board: a contiguous straight run of cells,
/// with hits tracked in its own mask.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    cells: Vec<Coord>,
    mask: Mask,
    hits: Mask,
}

impl Ship {
    /// Build a ship starting at `start`, extending along `orientation`.
    /// Cells are kept in traversal order, from `start` outward.
    pub(crate) fn new(
        start: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::IllegalPlacement);
        }
        let mut cells = Vec::with_capacity(length);
        let mut mask = Mask::new();
        for i in 0..length {
            let cell = orientation.step(start, i);
            if !cell.in_bounds() {
                return Err(GameError::OutOfBounds {
                    row: cell.row,
                    col: cell.col,
                });
            }
            mask.set(cell.row, cell.col)?;
            cells.push(cell);
        }
        Ok(Ship {
            length,
            orientation,
            cells,
            mask,
            hits: Mask::new(),
        })
    }

    /// Register a hit at `coord` if this ship occupies it.
    /// Returns `true` when the hit landed on this ship.
    pub(crate) fn register_hit(&mut self, coord: Coord) -> bool {
        if self.mask.get(coord.row, coord.col).unwrap_or(false) {
            let _ = self.hits.set(coord.row, coord.col);
            true
        } else {
            false
        }
    }

    /// Number of this ship's cells that have been hit.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Sunk when every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hit_count() == self.length
    }

    /// Whether the given cell of this ship has been hit.
    pub fn cell_hit(&self, coord: Coord) -> bool {
        self.hits.get(coord.row, coord.col).unwrap_or(false)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells in traversal order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Occupancy mask of the ship on the grid.
    pub fn mask(&self) -> Mask {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, start: {}, orientation: {:?}, hits: {} }}",
            self.length,
            self.cells[0],
            self.orientation,
            self.hit_count(),
        )
    }
}
