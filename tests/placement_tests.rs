//! Roster and placement behaviour tests.
//!
//! These cover the observable rules of the board:
//! - Adding players and blank-name rejection
//! - Manual placement and return to pool
//! - Random allocation onto the formation template
//! - Reset

use tactics_board::core::{
    BoardConfig, BoardId, BoardRng, FormationTemplate, PlacementError, PlayerId, Position,
    RosterStore,
};
use tactics_board::placement::{
    allocate_random, BoardRect, DropEvent, DropHit, PlacementEngine, Point,
};

fn store_of(n: usize) -> RosterStore {
    let names: Vec<String> = (1..=n).map(|i| format!("Player {i}")).collect();
    RosterStore::with_names(names.iter().map(String::as_str))
}

fn engine(seed: u64) -> PlacementEngine {
    PlacementEngine::new(BoardConfig::new().with_seed(seed))
}

#[test]
fn test_add_player_blank_is_noop() {
    let mut store = store_of(3);

    assert!(store.add_player("").is_none());
    assert!(store.add_player("    ").is_none());
    assert_eq!(store.len(), 3);

    let id = store.add_player("X").expect("non-blank name is added");
    assert_eq!(store.len(), 4);
    let player = store.get(id).expect("new player exists");
    assert_eq!(player.board, None);
    assert_eq!(player.position, Position::ORIGIN);
}

#[test]
fn test_place_player_touches_only_that_player() {
    let mut store = store_of(5);
    store.place_player(PlayerId(2), BoardId::Red, Position::new(10.0, 90.0));
    let before = store.snapshot();

    store.place_player(PlayerId(4), BoardId::Blue, Position::new(50.0, 50.0));

    let after = store.snapshot();
    for (old, new) in before.iter().zip(after.iter()) {
        if new.id == PlayerId(4) {
            assert_eq!(new.board, Some(BoardId::Blue));
            assert_eq!(new.position, Position::new(50.0, 50.0));
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_place_player_does_not_validate_range() {
    let mut store = store_of(1);

    store.place_player(PlayerId(1), BoardId::Blue, Position::new(-12.0, 140.0));

    assert_eq!(store.get(PlayerId(1)).unwrap().position, Position::new(-12.0, 140.0));
}

#[test]
fn test_drop_on_roster_panel_returns_player() {
    let mut store = store_of(4);
    store.place_player(PlayerId(1), BoardId::Blue, Position::new(30.0, 30.0));
    store.place_player(PlayerId(2), BoardId::Red, Position::new(70.0, 70.0));
    let before = store.snapshot();

    let pitch = BoardRect::new(0.0, 0.0, 680.0, 1050.0);
    let panel = BoardRect::new(300.0, 400.0, 200.0, 300.0);
    let event = DropEvent {
        player: PlayerId(1),
        pointer: Point::new(350.0, 500.0),
        hits: vec![DropHit::roster_panel(panel), DropHit::board(BoardId::Blue, pitch)],
    };

    engine(1).drop_player(&mut store, &event).expect("panel accepts");

    let moved = store.get(PlayerId(1)).unwrap();
    assert_eq!(moved.board, None);
    assert_eq!(moved.position, Position::ORIGIN);
    for id in [PlayerId(2), PlayerId(3), PlayerId(4)] {
        assert_eq!(store.get(id), before.get(id));
    }
}

#[test]
fn test_drop_on_board_uses_affine_normalization() {
    let mut store = store_of(2);
    let event = DropEvent {
        player: PlayerId(2),
        pointer: Point::new(240.0, 300.0),
        hits: vec![DropHit::board(BoardId::Red, BoardRect::new(40.0, 100.0, 400.0, 800.0))],
    };

    engine(1).drop_player(&mut store, &event).expect("board accepts");

    let p = store.get(PlayerId(2)).unwrap();
    assert_eq!(p.board, Some(BoardId::Red));
    assert_eq!(p.position, Position::new(50.0, 25.0));
}

#[test]
fn test_allocation_with_exactly_24() {
    let mut store = store_of(24);

    let allocation = engine(2024).allocate(&mut store).expect("24 is enough");
    let roster = store.roster();

    assert_eq!(roster.on_board(BoardId::Blue).count(), 11);
    assert_eq!(roster.on_board(BoardId::Red).count(), 11);
    assert_eq!(roster.unassigned_count(), 2);

    let template = FormationTemplate::four_four_two();
    for (i, id) in allocation.blue.iter().enumerate() {
        assert_eq!(roster.get(*id).unwrap().position, template.slots[i].position);
    }
    for (i, id) in allocation.red.iter().enumerate() {
        let expected = template.slots[i].position;
        let actual = roster.get(*id).unwrap().position;
        assert_eq!(actual.x, expected.x);
        assert_eq!(actual.y, 100.0 - expected.y);
    }
}

#[test]
fn test_allocation_with_23_or_fewer() {
    for n in [0, 1, 22, 23] {
        let mut store = store_of(n);
        let before = store.snapshot();

        let err = engine(5).allocate(&mut store).unwrap_err();

        assert_eq!(err, PlacementError::NotEnoughPlayers { required: 24, available: n });
        assert_eq!(store.snapshot(), before);
    }
}

#[test]
fn test_allocation_counts_only_unassigned() {
    let mut store = store_of(25);
    store.place_player(PlayerId(1), BoardId::Blue, Position::new(1.0, 1.0));
    store.place_player(PlayerId(2), BoardId::Red, Position::new(2.0, 2.0));

    let err = engine(5).allocate(&mut store).unwrap_err();
    assert_eq!(err, PlacementError::NotEnoughPlayers { required: 24, available: 23 });
}

#[test]
fn test_allocation_keeps_already_placed_players() {
    let mut store = store_of(30);
    store.place_player(PlayerId(7), BoardId::Blue, Position::new(12.0, 34.0));

    let allocation = engine(11).allocate(&mut store).unwrap();

    assert!(!allocation.blue.contains(&PlayerId(7)));
    assert!(!allocation.red.contains(&PlayerId(7)));
    assert_eq!(store.get(PlayerId(7)).unwrap().position, Position::new(12.0, 34.0));
    assert_eq!(store.roster().on_board(BoardId::Blue).count(), 12);
    assert_eq!(store.roster().unassigned_count(), 30 - 1 - 22);
}

#[test]
fn test_allocation_is_reproducible_with_seed() {
    let roster = store_of(29).snapshot();
    let template = FormationTemplate::four_four_two();

    let a = allocate_random(&roster, &template, 24, &mut BoardRng::new(123)).unwrap();
    let b = allocate_random(&roster, &template, 24, &mut BoardRng::new(123)).unwrap();

    assert_eq!(a.blue, b.blue);
    assert_eq!(a.red, b.red);
    assert_eq!(a.roster, b.roster);
}

#[test]
fn test_alternate_formation() {
    let config = BoardConfig::new()
        .with_formation(FormationTemplate::four_three_three())
        .with_seed(8);
    let mut store = store_of(24);

    PlacementEngine::new(config).allocate(&mut store).unwrap();

    let forwards_line: Vec<_> = store
        .roster()
        .on_board(BoardId::Blue)
        .filter(|p| p.position.y <= 40.0)
        .collect();
    assert_eq!(forwards_line.len(), 3);
}

#[test]
fn test_reset_all_and_idempotence() {
    let mut store = store_of(26);
    engine(3).allocate(&mut store).unwrap();
    store.place_player(PlayerId(1), BoardId::Red, Position::new(50.0, 50.0));

    store.reset_all();
    let once = store.snapshot();
    store.reset_all();
    let twice = store.snapshot();

    assert!(once.iter().all(|p| p.board.is_none() && p.position == Position::ORIGIN));
    assert_eq!(once, twice);
}
