//! One player's board: fleet, outgoing and incoming torpedoes, and the
//! interactive placement candidate.

use alloc::vec::Vec;
use core::fmt;

use crate::engine::common::BoardError;
use crate::engine::config::{HEIGHT, WIDTH};
use crate::engine::ship::{Orientation, Ship};
use crate::engine::torpedo::Torpedo;
use crate::engine::vec2::{Direction, Vec2};

/// State of one rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    ShipPresent,
    Hit,
    Miss,
}

/// Rows of cells, indexed `grid[y][x]`.
pub type Grid = [[CellState; WIDTH]; HEIGHT];

/// What the board is currently editing, if anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlacementMode {
    #[default]
    Idle,
    PlacingShip(Ship),
    PlacingTorpedo(Vec2),
}

/// A cell covered by the placement candidate. `conflict` marks a ship cell
/// over an existing ship, or a torpedo aimed at an already-fired cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateCell {
    pub pos: Vec2,
    pub conflict: bool,
}

#[derive(Default)]
pub struct Board {
    ships: Vec<Ship>,
    sent: Vec<Torpedo>,
    received: Vec<Torpedo>,
    placement: PlacementMode,
}

impl Board {
    /// Create an empty board (no ships, no shots, idle).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Torpedoes fired by this board, oldest first.
    pub fn sent_torpedoes(&self) -> &[Torpedo] {
        &self.sent
    }

    /// Torpedoes that struck this board, oldest first.
    pub fn received_torpedoes(&self) -> &[Torpedo] {
        &self.received
    }

    pub fn placement(&self) -> &PlacementMode {
        &self.placement
    }

    pub fn is_placing(&self) -> bool {
        !matches!(self.placement, PlacementMode::Idle)
    }

    /// Number of cells covered by the fleet.
    pub fn ship_cell_count(&self) -> usize {
        self.ships.iter().map(Ship::length).sum()
    }

    fn ship_cells(&self) -> impl Iterator<Item = &Vec2> + '_ {
        self.ships.iter().flat_map(|s| s.cells().iter())
    }

    fn collides(&self, ship: &Ship) -> bool {
        self.ships.iter().any(|placed| placed.overlaps(ship))
    }

    /// `true` when `pos` is covered by any ship.
    pub fn is_hit(&self, pos: Vec2) -> bool {
        self.ship_cells().any(|c| *c == pos)
    }

    /// Whether this board already fired at `pos`.
    pub fn has_fired_at(&self, pos: Vec2) -> bool {
        self.sent.iter().any(|t| t.position == pos)
    }

    /// Begin positioning a ship of `length` at the top-left corner.
    pub fn start_ship_placement(&mut self, length: usize) -> Result<(), BoardError> {
        let ship = Ship::new(Vec2::new(0, 0), length, Orientation::Horizontal)?;
        log::trace!("placing ship of length {}", length);
        self.placement = PlacementMode::PlacingShip(ship);
        Ok(())
    }

    /// Begin aiming a torpedo from the top-left corner.
    pub fn start_torpedo_placement(&mut self) {
        log::trace!("aiming torpedo");
        self.placement = PlacementMode::PlacingTorpedo(Vec2::new(0, 0));
    }

    /// Move the candidate one cell. Moves off the board are ignored.
    pub fn move_candidate(&mut self, direction: Direction) {
        match &mut self.placement {
            PlacementMode::PlacingShip(ship) => {
                let previous = ship.start();
                ship.set_start(previous.step(direction));
                if !ship.in_bounds() {
                    ship.set_start(previous);
                }
            }
            PlacementMode::PlacingTorpedo(pos) => *pos = pos.step(direction),
            PlacementMode::Idle => {}
        }
    }

    /// Rotate the ship candidate, unless that would push it off the board.
    pub fn rotate_candidate(&mut self) {
        if let PlacementMode::PlacingShip(ship) = &mut self.placement {
            ship.rotate();
            if !ship.in_bounds() {
                ship.rotate();
            }
        }
    }

    /// Accept the ship candidate into the fleet.
    ///
    /// Only collisions are checked here; candidate movement already keeps the
    /// footprint on the board. On error the candidate stays in place.
    pub fn commit_ship_placement(&mut self) -> Result<Ship, BoardError> {
        let ship = match &self.placement {
            PlacementMode::PlacingShip(ship) => ship,
            _ => return Err(BoardError::NotPlacing),
        };
        if self.collides(ship) {
            return Err(BoardError::ShipOverlaps);
        }
        let ship = ship.clone();
        self.ships.push(ship.clone());
        self.placement = PlacementMode::Idle;
        log::debug!("ship of length {} placed at {}", ship.length(), ship.start());
        Ok(ship)
    }

    /// Place a ship directly, checking both collisions and bounds.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if !ship.in_bounds() {
            return Err(BoardError::ShipOutOfBounds);
        }
        if self.collides(&ship) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at the aimed position. A repeat target is rejected and the
    /// board keeps aiming.
    pub fn commit_torpedo_placement(&mut self) -> Result<Torpedo, BoardError> {
        let target = match self.placement {
            PlacementMode::PlacingTorpedo(pos) => pos,
            _ => return Err(BoardError::NotPlacing),
        };
        let torpedo = self.fire_torpedo(target)?;
        self.placement = PlacementMode::Idle;
        Ok(torpedo)
    }

    /// Fire at `pos` without interactive aiming.
    pub fn fire_torpedo(&mut self, pos: Vec2) -> Result<Torpedo, BoardError> {
        if !pos.in_bounds() {
            return Err(BoardError::ShotOutOfBounds);
        }
        if self.has_fired_at(pos) {
            return Err(BoardError::AlreadyFired);
        }
        let torpedo = Torpedo::new(pos);
        self.sent.push(torpedo);
        Ok(torpedo)
    }

    /// Resolve an incoming torpedo against the fleet and return the resolved
    /// copy for the sender.
    ///
    /// A repeat position is resolved again but not recorded twice.
    pub fn receive_torpedo(&mut self, mut torpedo: Torpedo) -> Result<Torpedo, BoardError> {
        if !torpedo.position.in_bounds() {
            return Err(BoardError::ShotOutOfBounds);
        }
        torpedo.hit = self.is_hit(torpedo.position);
        if !self.received.iter().any(|t| t.position == torpedo.position) {
            self.received.push(torpedo);
        }
        Ok(torpedo)
    }

    /// Copy the receiver's verdict onto the matching sent torpedo.
    pub fn record_outcome(&mut self, resolved: Torpedo) -> Result<(), BoardError> {
        let sent = self
            .sent
            .iter_mut()
            .find(|t| t.position == resolved.position)
            .ok_or(BoardError::UnknownShot)?;
        sent.hit = resolved.hit;
        Ok(())
    }

    /// Hits among the torpedoes this board fired.
    pub fn hits_landed(&self) -> usize {
        self.sent.iter().filter(|t| t.hit).count()
    }

    /// Attacker-side win check: enough distinct hits to cover a fleet of
    /// `fleet_cells` cells.
    pub fn has_sunk_fleet(&self, fleet_cells: usize) -> bool {
        self.hits_landed() >= fleet_cells
    }

    /// Every ship cell has been struck by an incoming torpedo.
    pub fn is_defeated(&self) -> bool {
        let struck = self.received.iter().filter(|t| t.hit).count();
        struck >= self.ship_cell_count()
    }

    /// Own fleet plus incoming shots.
    pub fn home_view(&self) -> Grid {
        let mut grid: Grid = Default::default();
        for cell in self.ship_cells() {
            grid[cell.y][cell.x] = CellState::ShipPresent;
        }
        for t in &self.received {
            grid[t.position.y][t.position.x] = shot_state(t);
        }
        grid
    }

    /// Outgoing shots only; never reveals ships.
    pub fn strategy_view(&self) -> Grid {
        let mut grid: Grid = Default::default();
        for t in &self.sent {
            grid[t.position.y][t.position.x] = shot_state(t);
        }
        grid
    }

    /// Cells covered by the current candidate, with conflict flags.
    pub fn candidate_cells(&self) -> Vec<CandidateCell> {
        match &self.placement {
            PlacementMode::Idle => Vec::new(),
            PlacementMode::PlacingShip(ship) => ship
                .cells()
                .iter()
                .map(|&pos| CandidateCell {
                    pos,
                    conflict: self.is_hit(pos),
                })
                .collect(),
            PlacementMode::PlacingTorpedo(pos) => alloc::vec![CandidateCell {
                pos: *pos,
                conflict: self.has_fired_at(*pos),
            }],
        }
    }
}

fn shot_state(t: &Torpedo) -> CellState {
    if t.hit {
        CellState::Hit
    } else {
        CellState::Miss
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  sent: {:?},\n  received: {:?},\n  placement: {:?}\n}}",
            self.ships, self.sent, self.received, self.placement
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_candidate_cannot_leave_board() {
        let mut board = Board::new();
        board.start_ship_placement(3).unwrap();
        for _ in 0..20 {
            board.move_candidate(Direction::Right);
        }
        match board.placement() {
            PlacementMode::PlacingShip(ship) => {
                assert_eq!(ship.start(), Vec2::new(WIDTH - 3, 0));
                assert!(ship.in_bounds());
            }
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn rotate_reverts_when_out_of_bounds() {
        let mut board = Board::new();
        board.start_ship_placement(4).unwrap();
        for _ in 0..HEIGHT {
            board.move_candidate(Direction::Down);
        }
        board.rotate_candidate();
        match board.placement() {
            PlacementMode::PlacingShip(ship) => {
                assert_eq!(ship.orientation(), Orientation::Horizontal);
                assert_eq!(ship.start(), Vec2::new(0, HEIGHT - 1));
            }
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn failed_commit_keeps_candidate() {
        let mut board = Board::new();
        board.start_ship_placement(2).unwrap();
        board.commit_ship_placement().unwrap();
        board.start_ship_placement(3).unwrap();
        assert_eq!(board.commit_ship_placement(), Err(BoardError::ShipOverlaps));
        assert!(board.is_placing());
        assert_eq!(board.ships().len(), 1);
        let conflicts: Vec<bool> = board.candidate_cells().iter().map(|c| c.conflict).collect();
        assert_eq!(conflicts, [true, true, false]);
    }

    #[test]
    fn commit_without_candidate_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.commit_ship_placement(), Err(BoardError::NotPlacing));
        assert_eq!(board.commit_torpedo_placement(), Err(BoardError::NotPlacing));
        board.start_torpedo_placement();
        assert_eq!(board.commit_ship_placement(), Err(BoardError::NotPlacing));
    }

    #[test]
    fn strategy_view_never_shows_ships() {
        let mut board = Board::new();
        board
            .place_ship(Ship::new(Vec2::new(0, 0), 5, Orientation::Vertical).unwrap())
            .unwrap();
        board.fire_torpedo(Vec2::new(0, 0)).unwrap();
        let grid = board.strategy_view();
        assert!(grid.iter().flatten().all(|c| *c != CellState::ShipPresent));
        assert_eq!(grid[0][0], CellState::Miss);
        assert_eq!(board.home_view()[4][0], CellState::ShipPresent);
    }
}
