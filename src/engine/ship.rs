//! Ship definitions and footprint computation.

use alloc::vec::Vec;
use rand::Rng;

use crate::engine::common::BoardError;
use crate::engine::config::{HEIGHT, MAX_SHIP_LENGTH, WIDTH};
use crate::engine::vec2::Vec2;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A straight line of cells starting at `start` and extending right
/// (horizontal) or down (vertical).
///
/// The occupied cells are cached and recomputed by every setter, so `cells()`
/// always matches the current start, length and orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    start: Vec2,
    length: usize,
    orientation: Orientation,
    cells: Vec<Vec2>,
}

fn check_length(length: usize) -> Result<(), BoardError> {
    if length == 0 || length > MAX_SHIP_LENGTH {
        return Err(BoardError::InvalidLength(length));
    }
    Ok(())
}

impl Ship {
    /// Build a ship. The footprint may leave the board; bounds are the
    /// board's concern.
    pub fn new(start: Vec2, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        check_length(length)?;
        let mut ship = Ship {
            start,
            length,
            orientation,
            cells: Vec::with_capacity(MAX_SHIP_LENGTH),
        };
        ship.recompute();
        Ok(ship)
    }

    /// Random start anywhere on the grid with a random orientation. The
    /// result may hang off the board; callers validate with the board.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<Self, BoardError> {
        let start = Vec2::new(rng.random_range(0..WIDTH), rng.random_range(0..HEIGHT));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(start, length, orientation)
    }

    fn recompute(&mut self) {
        let horizontal = self.orientation == Orientation::Horizontal;
        self.cells.clear();
        self.cells
            .extend((0..self.length).map(|i| self.start.offset(i, horizontal)));
    }

    /// Toggle orientation around the start cell. No bounds check.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.flipped();
        self.recompute();
    }

    pub fn set_start(&mut self, start: Vec2) {
        self.start = start;
        self.recompute();
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), BoardError> {
        check_length(length)?;
        self.length = length;
        self.recompute();
        Ok(())
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, ordered from the start cell outward.
    pub fn cells(&self) -> &[Vec2] {
        &self.cells
    }

    /// Whether `pos` is one of the occupied cells.
    pub fn contains(&self, pos: Vec2) -> bool {
        self.cells.contains(&pos)
    }

    /// Whether every occupied cell lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.cells.iter().all(Vec2::in_bounds)
    }

    /// Whether any cell is shared with `other`.
    pub fn overlaps(&self, other: &Ship) -> bool {
        self.cells.iter().any(|c| other.contains(*c))
    }
}
