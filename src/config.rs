use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Aircraft Carrier", 'A', 5),
    ShipType::new("Battleship", 'B', 4),
    ShipType::new("Submarine", 'S', 3),
    ShipType::new("Cruiser", 'C', 3),
    ShipType::new("Destroyer", 'D', 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random placement attempts allowed per ship before the fleet is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Added to the human side's seed to derive the AI side's seed.
pub const AI_SEED_OFFSET: u64 = 1000;

/// Look up a fleet ship by its board symbol.
pub fn ship_by_symbol(symbol: char) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.symbol() == symbol)
}

/// How the two sides' random number generators are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedStrategy {
    /// Fresh seeds from the thread RNG.
    #[default]
    Entropy,
    /// Reproducible games; the AI side uses `seed + AI_SEED_OFFSET`.
    Fixed(u64),
    /// Seed from the wall clock in whole seconds.
    Clock,
}

/// Runtime options for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Print the AI fleet at startup and never mask the opponent board.
    pub reveal_opponent_board: bool,
    pub seed_strategy: SeedStrategy,
}

#[cfg(feature = "std")]
impl SeedStrategy {
    /// Seeds for the (human, AI) sides, or `None` for entropy seeding.
    pub fn seeds(&self) -> Option<(u64, u64)> {
        let base = match *self {
            SeedStrategy::Entropy => return None,
            SeedStrategy::Fixed(seed) => seed,
            SeedStrategy::Clock => std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        };
        Some((base, base.wrapping_add(AI_SEED_OFFSET)))
    }

    /// Build the (human, AI) RNG pair.
    pub fn rngs(&self) -> (rand::rngs::SmallRng, rand::rngs::SmallRng) {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        match self.seeds() {
            Some((human, ai)) => (SmallRng::seed_from_u64(human), SmallRng::seed_from_u64(ai)),
            None => {
                let mut seed_rng = rand::rng();
                (
                    SmallRng::from_rng(&mut seed_rng),
                    SmallRng::from_rng(&mut seed_rng),
                )
            }
        }
    }
}
