use broadside::{
    place_fleet, AttackResult, Board, BoardError, Cell, ShipType, BOARD_SIZE, SHIPS,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_fleet(&mut board, &SHIPS, &mut rng).unwrap();
    board
}

/// Every cell with (row + col) odd is already a miss, leaving no two
/// orthogonally adjacent water cells.
fn checkerboard() -> Board {
    let mut board = Board::new();
    for r in 0..BOARD_SIZE as usize {
        for c in 0..BOARD_SIZE as usize {
            if (r + c) % 2 == 1 {
                board.apply_attack(r, c).unwrap();
            }
        }
    }
    board
}

#[test]
fn test_exhausted_placement_keeps_earlier_ships() {
    let mut board = checkerboard();
    let mut rng = SmallRng::seed_from_u64(9);
    let fleet = [ShipType::new("Skiff", 'K', 1), ShipType::new("Longboat", 'L', 5)];

    let err = place_fleet(&mut board, &fleet, &mut rng).unwrap_err();
    assert_eq!(err, BoardError::PlacementExhausted { symbol: 'L' });
    assert_eq!(board.symbol_count('K'), 1);
    assert_eq!(board.symbol_count('L'), 0);
}

#[test]
fn test_full_fleet_cannot_be_placed_on_resolved_board() {
    let mut board = Board::new();
    for r in 0..BOARD_SIZE as usize {
        for c in 0..BOARD_SIZE as usize {
            board.apply_attack(r, c).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        place_fleet(&mut board, &SHIPS, &mut rng).unwrap_err(),
        BoardError::PlacementExhausted { symbol: 'A' }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_placement_covers_exactly_the_fleet(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.ship_cell_count(), TOTAL_SHIP_CELLS);
        for def in SHIPS.iter() {
            prop_assert_eq!(board.symbol_count(def.symbol()), def.length());
        }
    }

    #[test]
    fn fleet_ships_are_straight_runs(seed in any::<u64>()) {
        let board = random_board(seed);
        for def in SHIPS.iter() {
            let cells: Vec<_> = board
                .iter()
                .filter(|(_, cell)| *cell == Cell::Ship(def.symbol()))
                .map(|(coord, _)| coord)
                .collect();
            let same_row = cells.iter().all(|&(r, _)| r == cells[0].0);
            let same_col = cells.iter().all(|&(_, c)| c == cells[0].1);
            prop_assert!(same_row || same_col);
            let span = if same_row {
                cells.iter().map(|&(_, c)| c).max().unwrap() - cells.iter().map(|&(_, c)| c).min().unwrap()
            } else {
                cells.iter().map(|&(r, _)| r).max().unwrap() - cells.iter().map(|&(r, _)| r).min().unwrap()
            };
            prop_assert_eq!(span + 1, def.length());
        }
    }

    #[test]
    fn attack_resolves_cell_once(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE as usize,
        col in 0..BOARD_SIZE as usize,
    ) {
        let mut board = random_board(seed);
        let before = board.cell(row, col).unwrap();
        prop_assert!(board.is_valid_target(row, col));

        let result = board.apply_attack(row, col).unwrap();
        match before {
            Cell::Ship(_) => {
                prop_assert_eq!(result, AttackResult::Hit);
                prop_assert_eq!(board.cell(row, col).unwrap(), Cell::Hit);
            }
            _ => {
                prop_assert_eq!(result, AttackResult::Miss);
                prop_assert_eq!(board.cell(row, col).unwrap(), Cell::Miss);
            }
        }
        prop_assert!(!board.is_valid_target(row, col));

        let after = board.clone();
        prop_assert_eq!(board.apply_attack(row, col).unwrap_err(), BoardError::AlreadyAttacked);
        prop_assert_eq!(board, after);
    }

    #[test]
    fn off_grid_is_never_a_valid_target(
        seed in any::<u64>(),
        row in BOARD_SIZE as usize..1000,
        col in 0..1000usize,
    ) {
        let board = random_board(seed);
        prop_assert!(!board.is_valid_target(row, col));
        prop_assert!(!board.is_valid_target(col % BOARD_SIZE as usize, row));
    }
}
