use broadside::{
    place_fleet, ship_by_symbol, Board, GameConfig, SeedStrategy, AI_SEED_OFFSET, SHIPS,
};

#[test]
fn test_fleet_table() {
    let lengths: Vec<_> = SHIPS.iter().map(|s| s.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
    let symbols: Vec<_> = SHIPS.iter().map(|s| s.symbol()).collect();
    assert_eq!(symbols, vec!['A', 'B', 'S', 'C', 'D']);
    assert_eq!(ship_by_symbol('S').map(|s| s.length()), Some(3));
    assert_eq!(ship_by_symbol('Z'), None);
}

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert!(!config.reveal_opponent_board);
    assert_eq!(config.seed_strategy, SeedStrategy::Entropy);
    assert_eq!(SeedStrategy::Entropy.seeds(), None);
}

#[test]
fn test_fixed_seed_offsets_ai_side() {
    assert_eq!(SeedStrategy::Fixed(5).seeds(), Some((5, 5 + AI_SEED_OFFSET)));
    let (human, ai) = SeedStrategy::Clock.seeds().unwrap();
    assert_eq!(ai, human.wrapping_add(AI_SEED_OFFSET));
}

#[test]
fn test_fixed_seed_is_reproducible() {
    let layout = |strategy: SeedStrategy| {
        let (mut human_rng, mut ai_rng) = strategy.rngs();
        let mut human = Board::new();
        let mut ai = Board::new();
        place_fleet(&mut human, &SHIPS, &mut human_rng).unwrap();
        place_fleet(&mut ai, &SHIPS, &mut ai_rng).unwrap();
        (human, ai)
    };
    let (h1, a1) = layout(SeedStrategy::Fixed(42));
    let (h2, a2) = layout(SeedStrategy::Fixed(42));
    assert_eq!(h1, h2);
    assert_eq!(a1, a2);
    assert_ne!(h1, a1, "the two sides get different layouts");
}
