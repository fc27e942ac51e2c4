//! Grid occupancy and hit state for a single match.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{Coord, GameError, HitMark};
use crate::config::{GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Mask, Orientation, Ship};

/// The hidden-ship board: occupancy and targeted masks plus the placed
/// ships. Every occupied cell belongs to exactly one ship.
#[derive(Debug)]
pub struct Board {
    occupied: Mask,
    targeted: Mask,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board (no ships placed, nothing targeted).
    pub fn new() -> Self {
        Board {
            occupied: Mask::new(),
            targeted: Mask::new(),
            ships: Vec::new(),
        }
    }

    /// True iff all `length` cells from `start` along `orientation` lie on
    /// the grid and are unoccupied. No side effects.
    pub fn can_place(&self, start: Coord, length: usize, orientation: Orientation) -> bool {
        if length == 0 {
            return false;
        }
        for i in 0..length {
            let cell = orientation.step(start, i);
            if !cell.in_bounds() {
                return false;
            }
            if self.occupied.get(cell.row, cell.col).unwrap_or(true) {
                return false;
            }
        }
        true
    }

    /// Commit a placement. Re-validates and returns `IllegalPlacement`
    /// without touching state if the run is out of bounds or overlaps, so
    /// an unchecked call cannot corrupt the board. Returns the recorded
    /// ship, cells in traversal order.
    pub fn place(
        &mut self,
        start: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        let ship =
            Ship::new(start, length, orientation).map_err(|_| GameError::IllegalPlacement)?;
        // ensure no overlap
        if !(self.occupied & ship.mask()).is_empty() {
            return Err(GameError::IllegalPlacement);
        }
        self.occupied |= ship.mask();
        let idx = self.ships.len();
        self.ships.push(ship);
        Ok(&self.ships[idx])
    }

    /// Returns a random legal `(start, Orientation)` for a ship of
    /// `length`, by rejection sampling: uniform orientation, then a
    /// uniform start whose range already keeps the run on the grid.
    /// Gives up with `PlacementExhausted` after the retry ceiling.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coord, Orientation), GameError> {
        if length == 0 {
            return Err(GameError::IllegalPlacement);
        }
        if length > GRID_SIZE {
            // no start fits in either orientation
            return Err(GameError::PlacementExhausted { length });
        }
        let span = GRID_SIZE - length + 1;
        let mut attempts = 0;
        while attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (row, col) = match orientation {
                Orientation::Horizontal => {
                    (rng.random_range(0..GRID_SIZE), rng.random_range(0..span))
                }
                Orientation::Vertical => {
                    (rng.random_range(0..span), rng.random_range(0..GRID_SIZE))
                }
            };
            let start = Coord::new(row, col);
            if self.can_place(start, length, orientation) {
                log::debug!(
                    "placement for length {} found after {} attempt(s)",
                    length,
                    attempts
                );
                return Ok((start, orientation));
            }
        }
        Err(GameError::PlacementExhausted { length })
    }

    /// Mark a cell targeted and report which ship (if any) absorbed a new
    /// hit. Idempotent: re-targeting a cell reports `already_targeted` and
    /// changes nothing.
    pub fn mark_hit(&mut self, coord: Coord) -> Result<HitMark, GameError> {
        if !coord.in_bounds() {
            return Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        if self.targeted.get(coord.row, coord.col)? {
            return Ok(HitMark {
                already_targeted: true,
                ship: None,
            });
        }
        self.targeted.set(coord.row, coord.col)?;
        for (i, ship) in self.ships.iter_mut().enumerate() {
            if ship.register_hit(coord) {
                return Ok(HitMark {
                    already_targeted: false,
                    ship: Some(i),
                });
            }
        }
        Ok(HitMark {
            already_targeted: false,
            ship: None,
        })
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when all placed ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Number of cells occupied by ships.
    pub fn occupied_cells(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Whether a ship occupies `coord`.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupied.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Whether `coord` has been targeted by a shot.
    pub fn is_targeted(&self, coord: Coord) -> bool {
        self.targeted.get(coord.row, coord.col).unwrap_or(false)
    }
}
