use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    config::SHIPS,
    fleet::place_fleet,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Place the standard fleet onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        place_fleet(board, &SHIPS, rng)
    }

    /// Choose the next coordinate to attack on `opponent`. The returned
    /// coordinate must pass the move validator.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        opponent: &Board,
    ) -> anyhow::Result<(usize, usize)>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(
        &mut self,
        _coord: (usize, usize),
        _result: AttackResult,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the player of an opponent attack against its board.
    fn handle_opponent_attack(
        &mut self,
        _coord: (usize, usize),
        _result: AttackResult,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}
