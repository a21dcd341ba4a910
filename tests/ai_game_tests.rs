use broadside::{AiPlayer, CliPlayer, GameEngine, GameStatus, Player, Side, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Cursor;

fn setup(seed: u64) -> (GameEngine, SmallRng, SmallRng) {
    let mut human_rng = SmallRng::seed_from_u64(seed);
    let mut ai_rng = SmallRng::seed_from_u64(seed.wrapping_add(1000));
    let mut engine = GameEngine::new();
    AiPlayer::new()
        .place_ships(&mut human_rng, engine.board_mut(Side::Human))
        .unwrap();
    AiPlayer::new()
        .place_ships(&mut ai_rng, engine.board_mut(Side::Ai))
        .unwrap();
    (engine, human_rng, ai_rng)
}

fn assert_finished(engine: &GameEngine, status: GameStatus) {
    let human_shots = engine.shots_fired(Side::Human);
    let ai_shots = engine.shots_fired(Side::Ai);
    match status {
        GameStatus::Won => {
            assert!(engine.board(Side::Ai).is_fully_resolved());
            assert!(!engine.board(Side::Human).is_fully_resolved());
            assert_eq!(human_shots, ai_shots + 1);
        }
        GameStatus::Lost => {
            assert!(engine.board(Side::Human).is_fully_resolved());
            assert!(!engine.board(Side::Ai).is_fully_resolved());
            assert_eq!(human_shots, ai_shots);
        }
        GameStatus::InProgress => panic!("game returned while still in progress"),
    }
    assert!(human_shots >= TOTAL_SHIP_CELLS || ai_shots >= TOTAL_SHIP_CELLS);
    assert!(human_shots <= 100 && ai_shots <= 100);
    assert_eq!(engine.status(), status);
}

#[test]
fn test_ai_vs_ai_game() {
    for seed in [1u64, 123, 9_999] {
        let (mut engine, mut human_rng, mut ai_rng) = setup(seed);
        let mut p1 = AiPlayer::new();
        let mut p2 = AiPlayer::new();
        let status = engine
            .run(&mut p1, &mut p2, &mut human_rng, &mut ai_rng)
            .unwrap();
        assert_finished(&engine, status);
    }
}

#[test]
fn test_single_turn_fires_one_shot_each() {
    let (mut engine, mut human_rng, mut ai_rng) = setup(77);
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let status = engine
        .play_turn(&mut p1, &mut p2, &mut human_rng, &mut ai_rng)
        .unwrap();
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(engine.shots_fired(Side::Human), 1);
    assert_eq!(engine.shots_fired(Side::Ai), 1);
}

#[test]
fn test_engine_rejects_repeat_attack() {
    let (mut engine, _, _) = setup(5);
    engine.attack(Side::Human, 0, 0).unwrap();
    assert!(engine.attack(Side::Human, 0, 0).is_err());
    assert!(engine.attack(Side::Human, 0, 10).is_err());
    assert_eq!(engine.shots_fired(Side::Human), 1);
    assert!(engine.board(Side::Human).is_valid_target(0, 0));
}

#[test]
fn test_scripted_human_sweeps_the_board() {
    let (mut engine, mut human_rng, mut ai_rng) = setup(2024);
    let script: String = (0..10)
        .flat_map(|r| (0..10).map(move |c| format!("{} {}\n", r, c)))
        .collect();
    let mut human = CliPlayer::with_io(Cursor::new(script), Vec::new(), false);
    let mut ai = AiPlayer::new();

    let status = engine
        .run(&mut human, &mut ai, &mut human_rng, &mut ai_rng)
        .unwrap();
    assert_finished(&engine, status);

    let output = String::from_utf8(human.into_output()).unwrap();
    assert!(output.contains("Your Grid:"));
    assert!(output.contains("Enemy Grid:"));
    assert!(output.contains("Enter your attack coordinates (row and column): "));
    assert!(output.contains("Hit!"));
    assert!(!output.contains("Invalid move."));
}
