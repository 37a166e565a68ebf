//! Opponent trait and implementations
//!
//! An opponent decides where its fleet goes and where to shoot. It never
//! touches the human's board; the turn controller delivers its shots.

use rand::rngs::SmallRng;

use crate::engine::{board::Board, common::BoardError, ship::Ship, vec2::Vec2};

/// Interface implemented by computer-controlled players.
pub trait Opponent {
    /// Place one ship of `length` on `board`, returning the accepted ship.
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        length: usize,
    ) -> Result<Ship, BoardError>;

    /// Choose the next target. The caller retries when the board rejects it
    /// as a repeat.
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Vec2;
}

pub mod cpu;
pub use cpu::CpuPlayer;
