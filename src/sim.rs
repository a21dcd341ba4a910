#![cfg(feature = "std")]
//! Batch self-play of the hunt/target AI against randomly placed fleets.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    config::SHIPS,
    fleet::place_fleet,
    player_ai::AiPlayer,
};

/// Summary of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub games: usize,
    pub mean_shots: f64,
    pub min_shots: usize,
    pub max_shots: usize,
    pub hit_rate: f64,
}

/// Number of AI shots needed to clear one freshly placed fleet.
pub fn shots_to_clear(rng: &mut SmallRng) -> Result<(usize, usize), BoardError> {
    let mut board = Board::new();
    place_fleet(&mut board, &SHIPS, rng)?;
    let mut ai = AiPlayer::new();
    let mut shots = 0;
    let mut hits = 0;
    while !board.is_fully_resolved() {
        let shot = ai.attack(&mut board, rng)?;
        shots += 1;
        if shot.result == AttackResult::Hit {
            hits += 1;
        }
    }
    Ok((shots, hits))
}

/// Play `games` boards from `seed` and aggregate the shot counts.
pub fn simulate(seed: u64, games: usize) -> Result<SimReport, BoardError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut total_shots = 0;
    let mut total_hits = 0;
    let mut min_shots = usize::MAX;
    let mut max_shots = 0;
    for _ in 0..games {
        let (shots, hits) = shots_to_clear(&mut rng)?;
        total_shots += shots;
        total_hits += hits;
        min_shots = min_shots.min(shots);
        max_shots = max_shots.max(shots);
    }
    if games == 0 {
        min_shots = 0;
    }
    let mean_shots = if games == 0 {
        0.0
    } else {
        total_shots as f64 / games as f64
    };
    let hit_rate = if total_shots == 0 {
        0.0
    } else {
        total_hits as f64 / total_shots as f64
    };
    Ok(SimReport {
        seed,
        games,
        mean_shots,
        min_shots,
        max_shots,
        hit_rate,
    })
}
