//! Common types for the game core: board errors and the final game result.

/// Errors returned by Board and Ship operations.
///
/// Every rejected operation leaves the board exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship length outside `1..=MAX_SHIP_LENGTH`.
    InvalidLength(usize),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement leaves the board.
    ShipOutOfBounds,
    /// Torpedo target is not on the board.
    ShotOutOfBounds,
    /// A torpedo was already fired at this position.
    AlreadyFired,
    /// Commit requested without a matching candidate in progress.
    NotPlacing,
    /// Outcome recorded for a shot this board never fired.
    UnknownShot,
    /// Random placement gave up after too many attempts.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidLength(n) => write!(f, "Invalid ship length {}", n),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShotOutOfBounds => write!(f, "Torpedo target is out of bounds"),
            BoardError::AlreadyFired => write!(f, "A torpedo was already fired at this position"),
            BoardError::NotPlacing => write!(f, "No placement in progress"),
            BoardError::UnknownShot => write!(f, "No torpedo was fired at this position"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Terminal outcome reported once a winner is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    HumanWon,
    OpponentWon,
}
