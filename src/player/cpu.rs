use rand::rngs::SmallRng;
use rand::Rng;

use crate::engine::{
    board::Board,
    common::BoardError,
    config::{HEIGHT, MAX_PLACEMENT_ATTEMPTS, WIDTH},
    ship::Ship,
    vec2::Vec2,
};

use super::Opponent;

/// Uniform-random opponent: random placements and random shots, both
/// filtered by the board's own validation.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuPlayer;

impl CpuPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Opponent for CpuPlayer {
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        length: usize,
    ) -> Result<Ship, BoardError> {
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let ship = Ship::random(rng, length)?;
            match board.place_ship(ship.clone()) {
                Ok(()) => {
                    log::debug!(
                        "cpu placed ship of length {} after {} attempt(s)",
                        length,
                        attempt
                    );
                    return Ok(ship);
                }
                Err(BoardError::ShipOverlaps | BoardError::ShipOutOfBounds) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    fn select_target(&mut self, rng: &mut SmallRng, _board: &Board) -> Vec2 {
        Vec2::new(rng.random_range(0..WIDTH), rng.random_range(0..HEIGHT))
    }
}
