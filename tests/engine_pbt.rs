use blackbox::consts::{ATOM_COUNT, GRID_SIZE};
use blackbox::{Board, BorderPosition, GridCell, Outcome, Side, generate_atoms_seeded};
use proptest::prelude::*;

prop_compose! {
    fn arb_cell()(x in 0..GRID_SIZE as u8, y in 0..GRID_SIZE as u8) -> GridCell {
        GridCell::new(x, y)
    }
}

prop_compose! {
    fn arb_board()(cells in prop::collection::vec(arb_cell(), 0..=ATOM_COUNT)) -> Board {
        let mut board = Board::new();
        for cell in cells {
            board.place_atom(cell).unwrap();
        }
        board
    }
}

prop_compose! {
    fn arb_entry()(
        side in prop::sample::select(vec![Side::North, Side::South, Side::East, Side::West]),
        offset in 0..GRID_SIZE as u8
    ) -> BorderPosition {
        BorderPosition::new(side, offset)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_tracing_is_deterministic(board in arb_board(), entry in arb_entry()) {
        let first = board.fire_ray(entry);
        let second = board.fire_ray(entry);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_every_valid_entry_terminates(board in arb_board()) {
        for entry in BorderPosition::all() {
            let outcome = board.fire_ray(entry);
            prop_assert!(outcome.is_ok(), "ray from {} failed: {:?}", entry, outcome);
            if let Ok(Outcome::Exit(exit)) = outcome {
                prop_assert!(exit.offset < GRID_SIZE as u8);
            }
        }
    }

    #[test]
    fn test_empty_board_is_straight_through(offset in 0..GRID_SIZE as u8) {
        let board = Board::new();
        prop_assert_eq!(
            board.fire_ray(BorderPosition::new(Side::North, offset)).unwrap(),
            Outcome::Exit(BorderPosition::new(Side::South, offset))
        );
        prop_assert_eq!(
            board.fire_ray(BorderPosition::new(Side::South, offset)).unwrap(),
            Outcome::Exit(BorderPosition::new(Side::North, offset))
        );
        prop_assert_eq!(
            board.fire_ray(BorderPosition::new(Side::West, offset)).unwrap(),
            Outcome::Exit(BorderPosition::new(Side::East, offset))
        );
        prop_assert_eq!(
            board.fire_ray(BorderPosition::new(Side::East, offset)).unwrap(),
            Outcome::Exit(BorderPosition::new(Side::West, offset))
        );
    }

    #[test]
    fn test_generated_atoms_are_distinct(seed in any::<u64>()) {
        let atoms = generate_atoms_seeded(seed);
        for (i, cell) in atoms.iter().enumerate() {
            prop_assert!(cell.in_bounds());
            for earlier in &atoms[..i] {
                prop_assert_ne!(cell, earlier);
            }
        }
    }
}
