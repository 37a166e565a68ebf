//! Grid coordinates and movement directions.

use core::fmt;

use crate::engine::config::{HEIGHT, WIDTH};

/// One-cell movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cell coordinate; `x` is the column, `y` the row, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: usize,
    pub y: usize,
}

impl Vec2 {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// `true` when the coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.x < WIDTH && self.y < HEIGHT
    }

    /// Neighbour in `direction`, clamped to the board edges.
    pub fn step(self, direction: Direction) -> Self {
        let Vec2 { x, y } = self;
        match direction {
            Direction::Up => Vec2::new(x, y.saturating_sub(1)),
            Direction::Down => Vec2::new(x, if y + 1 < HEIGHT { y + 1 } else { y }),
            Direction::Left => Vec2::new(x.saturating_sub(1), y),
            Direction::Right => Vec2::new(if x + 1 < WIDTH { x + 1 } else { x }, y),
        }
    }

    /// Offset by `n` cells along the orientation axis, unchecked.
    pub(crate) fn offset(self, n: usize, horizontal: bool) -> Self {
        if horizontal {
            Vec2::new(self.x + n, self.y)
        } else {
            Vec2::new(self.x, self.y + n)
        }
    }
}

impl fmt::Display for Vec2 {
    /// Board notation: column letter then 1-based row, e.g. `C7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.x as u8) as char;
        write!(f, "{}{}", col, self.y + 1)
    }
}
