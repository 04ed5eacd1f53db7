//! Property tests for placement invariants.

use proptest::prelude::*;

use tactics_board::core::{BoardId, BoardRng, FormationTemplate, PlayerId, Position, RosterStore};
use tactics_board::placement::{allocate_random, relative_position, BoardRect, Point};

fn store_of(n: usize) -> RosterStore {
    let names: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
    RosterStore::with_names(names.iter().map(String::as_str))
}

proptest! {
    #[test]
    fn allocation_partitions_pool(n in 24usize..60, seed in any::<u64>()) {
        let roster = store_of(n).snapshot();
        let template = FormationTemplate::four_four_two();

        let allocation = allocate_random(&roster, &template, 24, &mut BoardRng::new(seed)).unwrap();

        prop_assert_eq!(allocation.roster.len(), n);
        prop_assert_eq!(allocation.roster.on_board(BoardId::Blue).count(), 11);
        prop_assert_eq!(allocation.roster.on_board(BoardId::Red).count(), 11);
        prop_assert_eq!(allocation.roster.unassigned_count(), n - 22);

        let mut chosen: Vec<PlayerId> = allocation.blue.iter().chain(&allocation.red).copied().collect();
        chosen.sort_unstable();
        chosen.dedup();
        prop_assert_eq!(chosen.len(), 22);
    }

    #[test]
    fn placed_positions_come_from_template(n in 24usize..40, seed in any::<u64>()) {
        let roster = store_of(n).snapshot();
        let template = FormationTemplate::four_four_two();
        let blue: Vec<Position> = template.blue_positions().collect();
        let red: Vec<Position> = template.red_positions().collect();

        let allocation = allocate_random(&roster, &template, 24, &mut BoardRng::new(seed)).unwrap();

        for p in allocation.roster.on_board(BoardId::Blue) {
            prop_assert!(blue.contains(&p.position));
        }
        for p in allocation.roster.on_board(BoardId::Red) {
            prop_assert!(red.contains(&p.position));
        }
    }

    #[test]
    fn pointer_inside_rect_lands_in_bounds(
        left in -500.0f64..500.0,
        top in -500.0f64..500.0,
        width in 1.0f64..2000.0,
        height in 1.0f64..2000.0,
        fx in 0.0f64..=1.0,
        fy in 0.0f64..=1.0,
    ) {
        let rect = BoardRect::new(left, top, width, height);
        let pointer = Point::new(left + fx * width, top + fy * height);

        let pos = relative_position(pointer, rect, false).unwrap();

        prop_assert!((pos.x - fx * 100.0).abs() < 1e-6);
        prop_assert!((pos.y - fy * 100.0).abs() < 1e-6);
    }

    #[test]
    fn clamped_drops_stay_in_bounds(px in -5000.0f64..5000.0, py in -5000.0f64..5000.0) {
        let rect = BoardRect::new(100.0, 100.0, 680.0, 1050.0);

        let pos = relative_position(Point::new(px, py), rect, true).unwrap();

        prop_assert!(pos.in_bounds());
    }

    #[test]
    fn reset_is_idempotent(n in 0usize..30, placed in proptest::collection::vec(any::<bool>(), 30)) {
        let mut store = store_of(n);
        for (i, place) in placed.iter().take(n).enumerate() {
            if *place {
                store.place_player(PlayerId(i as u64 + 1), BoardId::Red, Position::new(40.0, 60.0));
            }
        }

        store.reset_all();
        let once = store.snapshot();
        store.reset_all();

        prop_assert_eq!(&once, store.roster());
        prop_assert!(once.iter().all(|p| p.board.is_none() && p.position == Position::ORIGIN));
    }
}
