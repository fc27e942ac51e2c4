//! Match controller: fleet placement and shot resolution.

use log::{info, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{Coord, GameError, HitReport, ShotResult};

/// Lifecycle of a match. Placement happens inside [`Match::new`]; a won
/// match is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    InPlay,
    Won,
}

/// One running match: a fully placed board plus play state. Owned by a
/// single session; concurrent use requires external serialization.
#[derive(Debug)]
pub struct Match {
    board: Board,
    phase: MatchPhase,
    shots_taken: usize,
}

impl Match {
    /// Place every ship of `fleet` (in the given order; the default fleet
    /// is longest-first, which keeps retry counts low) and start the
    /// match. Fails with `PlacementExhausted` when a ship cannot be
    /// placed within the retry ceiling.
    pub fn new<R: Rng>(rng: &mut R, fleet: &[usize]) -> Result<Self, GameError> {
        let mut board = Board::new();
        for &length in fleet {
            let (start, orientation) = match board.random_placement(rng, length) {
                Ok(found) => found,
                Err(e) => {
                    warn!("fleet does not fit: {}", e);
                    return Err(e);
                }
            };
            board.place(start, length, orientation)?;
        }
        info!(
            "fleet of {} ship(s) placed, {} cells occupied",
            fleet.len(),
            board.occupied_cells()
        );
        Ok(Match {
            board,
            phase: MatchPhase::InPlay,
            shots_taken: 0,
        })
    }

    /// Resolve a shot at `coord`. Repeat shots on a cell report
    /// `AlreadyTargeted` and change nothing; the shot that sinks the last
    /// ship wins the match, after which further shots are a caller error.
    pub fn resolve_hit(&mut self, coord: Coord) -> Result<HitReport, GameError> {
        if self.phase == MatchPhase::Won {
            return Err(GameError::MatchAlreadyFinished);
        }
        let mark = self.board.mark_hit(coord)?;
        if mark.already_targeted {
            return Ok(HitReport {
                result: ShotResult::AlreadyTargeted,
                ship_sunk: false,
                match_won: false,
            });
        }
        self.shots_taken += 1;
        match mark.ship {
            Some(idx) => {
                let ship_sunk = self.board.ships()[idx].is_sunk();
                let match_won = ship_sunk && self.board.all_sunk();
                if match_won {
                    self.phase = MatchPhase::Won;
                    info!("match won after {} shot(s)", self.shots_taken);
                }
                Ok(HitReport {
                    result: ShotResult::Hit,
                    ship_sunk,
                    match_won,
                })
            }
            None => Ok(HitReport {
                result: ShotResult::Miss,
                ship_sunk: false,
                match_won: false,
            }),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The match's board, for rendering and inspection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shots resolved so far, repeats excluded.
    pub fn shots_taken(&self) -> usize {
        self.shots_taken
    }
}
