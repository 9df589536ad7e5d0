//! A full scripted match exercising placement leniency, the extra-turn
//! rule, and out-of-range rejection in one sequence.

use armada::{Game, GameError, Orientation, Phase, PlayerId, ShipClass, ShotOutcome};

#[test]
fn test_scripted_match_sequence() {
    let mut game: Game = Game::new();
    game.start().unwrap();

    game.place_boat(PlayerId::P1, ShipClass::Small, (4, 5), Orientation::Vertical)
        .unwrap();
    game.place_boat(PlayerId::P1, ShipClass::Medium, (7, 7), Orientation::Horizontal)
        .unwrap();
    game.place_boat(PlayerId::P1, ShipClass::Large, (1, 6), Orientation::Vertical)
        .unwrap();
    // overlaps the small at (5,5): the extra-large loses that segment
    game.place_boat(PlayerId::P1, ShipClass::ExtraLarge, (5, 1), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        game.board(PlayerId::P1).ship(ShipClass::ExtraLarge).remaining_segments(),
        4
    );
    assert_eq!(
        game.board(PlayerId::P1)
            .cell(5, 5)
            .unwrap()
            .owner,
        Some(ShipClass::Small)
    );

    game.place_boat(PlayerId::P2, ShipClass::Small, (0, 0), Orientation::Horizontal)
        .unwrap();
    game.place_boat(PlayerId::P2, ShipClass::Medium, (1, 0), Orientation::Horizontal)
        .unwrap();
    game.place_boat(PlayerId::P2, ShipClass::Large, (2, 0), Orientation::Horizontal)
        .unwrap();
    game.place_boat(PlayerId::P2, ShipClass::ExtraLarge, (3, 0), Orientation::Horizontal)
        .unwrap();

    game.play().unwrap();
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.turn(), PlayerId::P1);

    // hit on p2's small: p1 keeps the turn
    assert_eq!(game.shot(0, 1).unwrap(), ShotOutcome::Hit);
    assert_eq!(game.turn(), PlayerId::P1);

    // wild shot off the board: rejected, turn unchanged
    assert_eq!(
        game.shot(0, 15).unwrap_err(),
        GameError::ShotOutOfRange { row: 0, col: 15 }
    );
    assert_eq!(game.turn(), PlayerId::P1);

    // two hits on the medium, then water
    assert_eq!(game.shot(1, 0).unwrap(), ShotOutcome::Hit);
    assert_eq!(game.shot(1, 1).unwrap(), ShotOutcome::Hit);
    assert_eq!(game.shot(1, 4).unwrap(), ShotOutcome::Miss);
    assert_eq!(game.turn(), PlayerId::P2);

    let guide = game.show_guide_board(PlayerId::P1).unwrap();
    assert_eq!(guide[0][1], 2);
    assert_eq!(guide[1][0], 2);
    assert_eq!(guide[1][1], 2);
    assert_eq!(guide[1][4], 1);

    let p2 = game.board(PlayerId::P2);
    assert_eq!(p2.ship(ShipClass::Small).remaining_segments(), 1);
    assert_eq!(p2.ship(ShipClass::Medium).remaining_segments(), 1);
    assert_eq!(p2.ships_remaining(), 4);

    // 14 fleet cells minus the 3 struck ones remain visible
    let occupied: usize = game
        .show_board(PlayerId::P2)
        .unwrap()
        .iter()
        .map(|row| row.iter().map(|&v| v as usize).sum::<usize>())
        .sum();
    assert_eq!(occupied, 11);
}
