//! Game core (no_std compatible)
//!
//! Board, ship and torpedo model plus the turn controller. Needs only
//! `alloc`; terminal I/O lives outside this module.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod ship;
pub mod torpedo;
pub mod vec2;

// Re-export commonly used types
pub use board::{Board, CandidateCell, CellState, Grid, PlacementMode};
pub use common::{BoardError, GameResult};
pub use config::*;
pub use game::{Game, Phase, TickOutcome, Turn};
pub use ship::{Orientation, Ship};
pub use torpedo::Torpedo;
pub use vec2::{Direction, Vec2};
