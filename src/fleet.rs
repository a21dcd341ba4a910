//! Randomized, non-overlapping fleet layout.

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Placement, ShipType};
use rand::Rng;

/// Returns a random valid placement for `ship`, trying up to
/// `MAX_PLACEMENT_ATTEMPTS` origins drawn uniformly over the whole grid.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    ship: &ShipType,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let row = rng.random_range(0..BOARD_SIZE as usize);
        let col = rng.random_range(0..BOARD_SIZE as usize);
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let placement = Placement::new(row, col, orientation);
        if board.check_placement(ship, &placement).is_ok() {
            return Ok(placement);
        }
    }
    Err(BoardError::PlacementExhausted {
        symbol: ship.symbol(),
    })
}

/// Place every ship of `fleet` in order. Fails on the first ship that cannot
/// be placed; ships already written stay on the board.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &[ShipType],
    rng: &mut R,
) -> Result<(), BoardError> {
    for ship in fleet {
        let placement = match random_placement(board, ship, rng) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("giving up on {} ({}): {}", ship.name(), ship.symbol(), e);
                return Err(e);
            }
        };
        board.place(ship, &placement)?;
        log::debug!(
            "placed {} at ({}, {}) {:?}",
            ship.name(),
            placement.row,
            placement.col,
            placement.orientation
        );
    }
    Ok(())
}
