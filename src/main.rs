#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, AiPlayer, BoardView, CliPlayer, GameConfig, GameEngine, GameStatus, Player,
    SeedStrategy, Side,
};

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Play a grid battle against a hunt/target AI", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, conflicts_with = "seed", help = "Seed both sides from the wall clock")]
    clock_seed: bool,
    #[arg(long, help = "Print the AI fleet at startup and show the enemy grid unmasked")]
    reveal: bool,
}

#[cfg(feature = "std")]
impl Cli {
    fn config(&self) -> GameConfig {
        let seed_strategy = match (self.seed, self.clock_seed) {
            (Some(s), _) => SeedStrategy::Fixed(s),
            (None, true) => SeedStrategy::Clock,
            (None, false) => SeedStrategy::Entropy,
        };
        GameConfig {
            reveal_opponent_board: self.reveal,
            seed_strategy,
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Cli::parse().config();
    if let SeedStrategy::Fixed(s) = config.seed_strategy {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let (mut human_rng, mut ai_rng) = config.seed_strategy.rngs();
    let mut human = CliPlayer::new(config.reveal_opponent_board);
    let mut ai = AiPlayer::new();
    let mut engine = GameEngine::new();

    human
        .place_ships(&mut human_rng, engine.board_mut(Side::Human))
        .map_err(|e| anyhow::anyhow!("player fleet setup failed: {}", e))?;
    ai.place_ships(&mut ai_rng, engine.board_mut(Side::Ai))
        .map_err(|e| anyhow::anyhow!("AI fleet setup failed: {}", e))?;

    if config.reveal_opponent_board {
        println!("\n[DEBUG] Player Ship Placement:");
        print!("{}", BoardView::revealed(engine.board(Side::Human)));
        println!("\n[DEBUG] AI Ship Placement:");
        print!("{}", BoardView::revealed(engine.board(Side::Ai)));
    }

    println!("Welcome to Battleship!");
    let status = engine.run(&mut human, &mut ai, &mut human_rng, &mut ai_rng)?;
    match status {
        GameStatus::Won => println!("Congratulations! You sank all enemy ships!"),
        GameStatus::Lost => println!("Game Over! The AI sank all your ships!"),
        GameStatus::InProgress => {}
    }
    Ok(())
}
