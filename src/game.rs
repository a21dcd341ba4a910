use crate::{
    board::Board,
    common::{AttackResult, BoardError, Shot},
    player::Player,
};
use rand::rngs::SmallRng;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }
}

/// Current status of a game, from the human side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Core game logic holding both boards and the shot counters.
pub struct GameEngine {
    human_board: Board,
    ai_board: Board,
    human_shots: usize,
    ai_shots: usize,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine with two empty boards.
    pub fn new() -> Self {
        Self {
            human_board: Board::new(),
            ai_board: Board::new(),
            human_shots: 0,
            ai_shots: 0,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Ai => &self.ai_board,
        }
    }

    /// Mutable board owned by `side`, for ship placement.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human_board,
            Side::Ai => &mut self.ai_board,
        }
    }

    /// Shots fired so far by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        match side {
            Side::Human => self.human_shots,
            Side::Ai => self.ai_shots,
        }
    }

    /// Resolve an attack by `attacker` on its opponent's board. Coordinates the
    /// move validator rejects come back as `OutOfBounds` or `AlreadyAttacked`.
    pub fn attack(
        &mut self,
        attacker: Side,
        row: usize,
        col: usize,
    ) -> Result<AttackResult, BoardError> {
        let result = self.board_mut(attacker.opponent()).apply_attack(row, col)?;
        match attacker {
            Side::Human => self.human_shots += 1,
            Side::Ai => self.ai_shots += 1,
        }
        log::debug!("{:?} attacks ({}, {}) -> {:?}", attacker, row, col, result);
        Ok(result)
    }

    /// Evaluate the current game status. The AI board is checked first since
    /// the human always shoots first within a turn.
    pub fn status(&self) -> GameStatus {
        if self.ai_board.is_fully_resolved() {
            GameStatus::Won
        } else if self.human_board.is_fully_resolved() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Let `player` on `side` choose and fire one shot, notifying both players.
    fn take_shot(
        &mut self,
        side: Side,
        player: &mut dyn Player,
        opponent: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Shot> {
        let (row, col) = player.select_target(
            rng,
            self.board(side),
            self.board(side.opponent()),
        )?;
        let result = self
            .attack(side, row, col)
            .map_err(|e| anyhow::anyhow!(e))?;
        player.handle_attack_result((row, col), result)?;
        opponent.handle_opponent_attack((row, col), result)?;
        Ok(Shot { row, col, result })
    }

    /// Play one full turn: the human shoots at the AI board, then the AI shoots
    /// back unless the human has just cleared the AI fleet.
    pub fn play_turn(
        &mut self,
        human: &mut dyn Player,
        ai: &mut dyn Player,
        human_rng: &mut SmallRng,
        ai_rng: &mut SmallRng,
    ) -> anyhow::Result<GameStatus> {
        self.take_shot(Side::Human, human, ai, human_rng)?;
        if self.ai_board.is_fully_resolved() {
            return Ok(GameStatus::Won);
        }
        self.take_shot(Side::Ai, ai, human, ai_rng)?;
        if self.human_board.is_fully_resolved() {
            return Ok(GameStatus::Lost);
        }
        Ok(GameStatus::InProgress)
    }

    /// Play turns until one fleet is cleared.
    pub fn run(
        &mut self,
        human: &mut dyn Player,
        ai: &mut dyn Player,
        human_rng: &mut SmallRng,
        ai_rng: &mut SmallRng,
    ) -> anyhow::Result<GameStatus> {
        loop {
            let status = self.play_turn(human, ai, human_rng, ai_rng)?;
            if status != GameStatus::InProgress {
                log::info!(
                    "game over: {:?} after {} human and {} AI shots",
                    status,
                    self.human_shots,
                    self.ai_shots
                );
                return Ok(status);
            }
        }
    }
}
