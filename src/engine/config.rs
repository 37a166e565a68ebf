pub const WIDTH: usize = 10;
pub const HEIGHT: usize = 10;
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Longest ship a board accepts.
pub const MAX_SHIP_LENGTH: usize = 5;
pub const NUM_SHIPS: usize = 5;
/// Fleet placed by each side, in placement order.
pub const SHIP_LENGTHS: [usize; NUM_SHIPS] = [1, 2, 3, 4, 5];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 1 + 2 + 3 + 4 + 5;

/// Upper bound on random placement draws before the CPU gives up on a ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
