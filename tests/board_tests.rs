use armada::{
    Board, BoardError, Orientation, ShipClass, ShotOutcome, CLASSES, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn place(board: &mut Board, class: ShipClass, origin: (usize, usize), orientation: Orientation) {
    board.mark_placed(class, origin, orientation);
    board.place_ship(class);
}

#[test]
fn test_place_vertical_exact_cells() {
    let mut board: Board = Board::new();
    place(&mut board, ShipClass::Small, (4, 5), Orientation::Vertical);

    assert!(board.cell(4, 5).unwrap().occupied);
    assert_eq!(board.cell(4, 5).unwrap().owner, Some(ShipClass::Small));
    assert!(board.cell(5, 5).unwrap().occupied);
    assert_eq!(board.cell(5, 5).unwrap().owner, Some(ShipClass::Small));
    assert!(!board.cell(6, 5).unwrap().occupied);

    let ship = board.ship(ShipClass::Small);
    assert!(ship.is_placed());
    assert_eq!(ship.remaining_segments(), 2);
    assert_eq!(ship.origin(), (4, 5));
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_place_truncated_at_edge() {
    // 5-segment ship at (0,7) horizontal on a 10-board keeps only 3 segments.
    let mut board: Board = Board::new();
    place(&mut board, ShipClass::ExtraLarge, (0, 7), Orientation::Horizontal);

    for col in 7..10 {
        assert!(board.cell(0, col).unwrap().occupied);
        assert_eq!(board.cell(0, col).unwrap().owner, Some(ShipClass::ExtraLarge));
    }
    assert_eq!(board.ship(ShipClass::ExtraLarge).remaining_segments(), 3);
    // a truncated ship still counts as on the board
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_place_overlap_skips_segment() {
    let mut board: Board = Board::new();
    place(&mut board, ShipClass::Small, (0, 0), Orientation::Vertical);
    place(&mut board, ShipClass::Medium, (0, 0), Orientation::Horizontal);

    // (0,0) stays owned by the first ship; the medium kept (0,1) and (0,2)
    assert_eq!(board.cell(0, 0).unwrap().owner, Some(ShipClass::Small));
    assert_eq!(board.cell(0, 1).unwrap().owner, Some(ShipClass::Medium));
    assert_eq!(board.cell(0, 2).unwrap().owner, Some(ShipClass::Medium));
    assert_eq!(board.ship(ShipClass::Medium).remaining_segments(), 2);
    assert_eq!(board.ships_remaining(), 2);
}

#[test]
fn test_place_fully_out_of_bounds() {
    let mut board: Board = Board::new();
    place(&mut board, ShipClass::Medium, (20, 20), Orientation::Vertical);

    let ship = board.ship(ShipClass::Medium);
    assert!(ship.is_placed());
    assert_eq!(ship.remaining_segments(), 0);
    // no segment landed, so the fleet count is untouched
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_place_at_extreme_origin_skips_all_segments() {
    // a cursor walking from an origin near usize::MAX must not wrap back
    // into the grid; every segment is skipped
    let mut board: Board = Board::new();
    place(&mut board, ShipClass::Small, (usize::MAX, 0), Orientation::Vertical);

    assert_eq!(board.ship(ShipClass::Small).remaining_segments(), 0);
    assert_eq!(board.ships_remaining(), 0);
    assert!(board
        .occupancy()
        .iter()
        .all(|row| row.iter().all(|&v| v == 0)));

    let mut board: Board = Board::new();
    place(&mut board, ShipClass::Medium, (0, usize::MAX), Orientation::Horizontal);
    assert_eq!(board.ship(ShipClass::Medium).remaining_segments(), 0);
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_largest_supported_board_size() {
    // 11x11 is the limit of the u128-backed shot grids; larger boards are
    // rejected at compile time
    let mut board: Board<11> = Board::new();
    board.mark_placed(ShipClass::Small, (9, 10), Orientation::Vertical);
    board.place_ship(ShipClass::Small);
    assert!(board.cell(10, 10).unwrap().occupied);
    assert_eq!(board.ship(ShipClass::Small).remaining_segments(), 2);

    board.record_shot(10, 10, true).unwrap();
    assert_eq!(board.observations()[10][10], 2);
    assert_eq!(board.resolve_shot(10, 10).unwrap(), ShotOutcome::Hit);
}

#[test]
fn test_resolve_shot_hit_miss_and_idempotence() {
    let mut board: Board = Board::new();
    place(&mut board, ShipClass::Small, (4, 5), Orientation::Vertical);

    assert_eq!(board.resolve_shot(0, 0).unwrap(), ShotOutcome::Miss);

    assert_eq!(board.resolve_shot(4, 5).unwrap(), ShotOutcome::Hit);
    assert!(!board.cell(4, 5).unwrap().occupied);
    assert_eq!(board.cell(4, 5).unwrap().owner, None);
    assert_eq!(board.ship(ShipClass::Small).remaining_segments(), 1);

    // second shot at the same cell never double-decrements
    assert_eq!(board.resolve_shot(4, 5).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.ship(ShipClass::Small).remaining_segments(), 1);

    assert_eq!(
        board.resolve_shot(5, 5).unwrap(),
        ShotOutcome::Sunk(ShipClass::Small)
    );
    assert!(board.ship(ShipClass::Small).is_sunk());
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_resolve_shot_out_of_bounds() {
    let mut board: Board = Board::new();
    assert_eq!(
        board.resolve_shot(10, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 0 }
    );
}

#[test]
fn test_all_ships_placed() {
    let mut board: Board = Board::new();
    assert!(!board.all_ships_placed());

    place(&mut board, ShipClass::Small, (0, 0), Orientation::Horizontal);
    place(&mut board, ShipClass::Medium, (1, 0), Orientation::Horizontal);
    place(&mut board, ShipClass::Large, (2, 0), Orientation::Horizontal);
    assert!(!board.all_ships_placed());

    place(&mut board, ShipClass::ExtraLarge, (3, 0), Orientation::Horizontal);
    assert!(board.all_ships_placed());
    assert_eq!(board.ships_remaining(), NUM_SHIPS);
}

#[test]
fn test_observation_grid_last_write_wins() {
    let mut board: Board = Board::new();
    board.record_shot(2, 3, true).unwrap();
    board.record_shot(4, 4, false).unwrap();

    let obs = board.observations();
    assert_eq!(obs[2][3], 2);
    assert_eq!(obs[4][4], 1);
    assert_eq!(obs[0][0], 0);

    // re-firing at a struck cell resolves as a miss and downgrades the mark
    board.record_shot(2, 3, false).unwrap();
    assert_eq!(board.observations()[2][3], 1);
}

#[test]
fn test_occupancy_projection() {
    let mut board: Board = Board::new();
    place(&mut board, ShipClass::Small, (0, 0), Orientation::Horizontal);

    let occ = board.occupancy();
    assert_eq!(occ[0][0], 1);
    assert_eq!(occ[0][1], 1);
    assert_eq!(occ[0][2], 0);

    board.resolve_shot(0, 0).unwrap();
    // a struck cell is indistinguishable from water
    assert_eq!(board.occupancy()[0][0], 0);
}

#[test]
fn test_random_placement_full_fleet() {
    let mut board: Board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for class in CLASSES {
        let (row, col, orientation) = board.random_placement(&mut rng, class).unwrap();
        place(&mut board, class, (row, col), orientation);
        // random placements are never truncated
        assert_eq!(board.ship(class).remaining_segments(), class.segments());
    }
    let occupied: usize = board
        .occupancy()
        .iter()
        .map(|row| row.iter().map(|&v| v as usize).sum::<usize>())
        .sum();
    assert_eq!(occupied, TOTAL_SHIP_CELLS);
    assert_eq!(board.ships_remaining(), NUM_SHIPS);
}
