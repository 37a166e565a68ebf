use broadside::{
    Board, BoardError, CellState, Direction, Orientation, PlacementMode, Ship, Torpedo, Vec2,
    HEIGHT, WIDTH,
};

fn ship(x: usize, y: usize, len: usize, o: Orientation) -> Ship {
    Ship::new(Vec2::new(x, y), len, o).unwrap()
}

#[test]
fn test_overlapping_placement_rejected() {
    let mut board = Board::new();
    board.place_ship(ship(0, 0, 2, Orientation::Horizontal)).unwrap();
    assert_eq!(
        board.place_ship(ship(0, 0, 2, Orientation::Horizontal)),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship(ship(WIDTH - 2, 0, 3, Orientation::Horizontal)),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship(ship(0, HEIGHT - 1, 2, Orientation::Vertical)),
        Err(BoardError::ShipOutOfBounds)
    );
    assert!(board.ships().is_empty());
}

#[test]
fn test_candidate_movement_clamps() {
    let mut board = Board::new();
    board.start_torpedo_placement();
    board.move_candidate(Direction::Up);
    board.move_candidate(Direction::Left);
    assert_eq!(board.placement(), &PlacementMode::PlacingTorpedo(Vec2::new(0, 0)));
    for _ in 0..(WIDTH + 3) {
        board.move_candidate(Direction::Right);
    }
    assert_eq!(
        board.placement(),
        &PlacementMode::PlacingTorpedo(Vec2::new(WIDTH - 1, 0))
    );
}

#[test]
fn test_moving_idle_board_is_noop() {
    let mut board = Board::new();
    board.move_candidate(Direction::Down);
    board.rotate_candidate();
    assert_eq!(board.placement(), &PlacementMode::Idle);
}

#[test]
fn test_interactive_ship_placement() {
    let mut board = Board::new();
    board.start_ship_placement(3).unwrap();
    board.move_candidate(Direction::Down);
    board.move_candidate(Direction::Right);
    board.rotate_candidate();
    let placed = board.commit_ship_placement().unwrap();
    assert_eq!(placed.start(), Vec2::new(1, 1));
    assert_eq!(placed.orientation(), Orientation::Vertical);
    assert!(!board.is_placing());
    assert_eq!(board.home_view()[3][1], CellState::ShipPresent);
}

#[test]
fn test_duplicate_torpedo_rejected() {
    let mut board = Board::new();
    board.fire_torpedo(Vec2::new(3, 3)).unwrap();
    assert_eq!(board.fire_torpedo(Vec2::new(3, 3)), Err(BoardError::AlreadyFired));
    assert_eq!(board.sent_torpedoes().len(), 1);

    board.start_torpedo_placement();
    for _ in 0..3 {
        board.move_candidate(Direction::Right);
        board.move_candidate(Direction::Down);
    }
    assert_eq!(board.commit_torpedo_placement(), Err(BoardError::AlreadyFired));
    assert!(board.is_placing());
    assert!(board.candidate_cells()[0].conflict);
    assert_eq!(board.sent_torpedoes().len(), 1);
}

#[test]
fn test_off_board_torpedo_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.fire_torpedo(Vec2::new(WIDTH, 0)),
        Err(BoardError::ShotOutOfBounds)
    );
    assert_eq!(
        board.receive_torpedo(Torpedo::new(Vec2::new(0, HEIGHT))),
        Err(BoardError::ShotOutOfBounds)
    );
}

#[test]
fn test_single_cell_fleet_sunk() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.place_ship(ship(0, 0, 1, Orientation::Horizontal)).unwrap();

    let shot = b.fire_torpedo(Vec2::new(0, 0)).unwrap();
    assert!(!shot.hit);
    let resolved = a.receive_torpedo(shot).unwrap();
    assert!(resolved.hit);
    b.record_outcome(resolved).unwrap();

    assert!(a.is_defeated());
    assert!(b.has_sunk_fleet(a.ship_cell_count()));
    assert_eq!(b.strategy_view()[0][0], CellState::Hit);
    assert_eq!(a.home_view()[0][0], CellState::Hit);
}

#[test]
fn test_miss_is_recorded_on_both_views() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.place_ship(ship(0, 0, 2, Orientation::Horizontal)).unwrap();
    let resolved = a.receive_torpedo(b.fire_torpedo(Vec2::new(5, 5)).unwrap()).unwrap();
    b.record_outcome(resolved).unwrap();
    assert!(!resolved.hit);
    assert_eq!(a.home_view()[5][5], CellState::Miss);
    assert_eq!(b.strategy_view()[5][5], CellState::Miss);
    assert!(!a.is_defeated());
}

#[test]
fn test_record_outcome_for_unknown_shot() {
    let mut board = Board::new();
    let stray = Torpedo {
        position: Vec2::new(1, 1),
        hit: true,
    };
    assert_eq!(board.record_outcome(stray), Err(BoardError::UnknownShot));
}

#[test]
fn test_repeat_incoming_shot_not_counted_twice() {
    let mut board = Board::new();
    board.place_ship(ship(0, 0, 2, Orientation::Horizontal)).unwrap();
    let t = Torpedo::new(Vec2::new(0, 0));
    assert!(board.receive_torpedo(t).unwrap().hit);
    assert!(board.receive_torpedo(t).unwrap().hit);
    assert_eq!(board.received_torpedoes().len(), 1);
    assert!(!board.is_defeated());
}
