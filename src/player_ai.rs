use crate::{
    ai::{self, TargetMemory},
    board::Board,
    common::{AttackResult, BoardError, Shot},
};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::player::Player;

/// Hunt/target AI. Each instance owns its own target memory.
#[derive(Debug, Default)]
pub struct AiPlayer {
    memory: TargetMemory,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// AI seeded with an existing memory, mostly useful for replaying a position.
    pub fn with_memory(memory: TargetMemory) -> Self {
        Self { memory }
    }

    pub fn memory(&self) -> &TargetMemory {
        &self.memory
    }

    /// Select a target, resolve it against `board` and update the memory.
    pub fn attack<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<Shot, BoardError> {
        let (row, col) = ai::select_target_coordinate(board, &mut self.memory, rng)
            .ok_or(BoardError::NoTargetsRemaining)?;
        let result = board.apply_attack(row, col)?;
        self.record(row, col, result);
        Ok(Shot { row, col, result })
    }

    fn record(&mut self, row: usize, col: usize, result: AttackResult) {
        // misses never touch the memory, even mid-targeting
        if result == AttackResult::Hit {
            self.memory.remember_hit((row, col));
        }
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        opponent: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        ai::select_target_coordinate(opponent, &mut self.memory, rng)
            .ok_or_else(|| anyhow::anyhow!(BoardError::NoTargetsRemaining))
    }

    fn handle_attack_result(
        &mut self,
        coord: (usize, usize),
        result: AttackResult,
    ) -> anyhow::Result<()> {
        self.record(coord.0, coord.1, result);
        Ok(())
    }
}
