#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod score;
#[cfg(feature = "std")]
pub mod sessions;
mod ship;
#[cfg(feature = "std")]
pub mod ui;
#[cfg(feature = "std")]
pub mod wire;

pub use bitgrid::{BitGrid, GridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use score::{MemorySink, ScoreRecord, ScoreSink};
#[cfg(feature = "std")]
pub use sessions::{MatchId, MatchStore, UserId};
pub use ship::*;
#[cfg(feature = "std")]
pub use wire::{CellView, ShipView, ShotView};
