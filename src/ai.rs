// Hunt/target decision procedure for the AI side.
// One remembered hit, four fixed neighbour probes, random hunting otherwise.

use crate::{
    board::{is_valid_move, Board},
    config::BOARD_SIZE,
};
use rand::Rng;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Orthogonal probe direction around a remembered hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed probe order used while targeting.
    pub const ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Neighbour of (row, col) in this direction, or `None` when it would leave
    /// the grid through row or column zero.
    pub fn step(self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        match self {
            Direction::Up => row.checked_sub(1).map(|r| (r, col)),
            Direction::Down => Some((row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|c| (row, c)),
            Direction::Right => Some((row, col + 1)),
        }
    }
}

/// Cross-turn AI state: the most recent hit and whether targeting is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetMemory {
    last_hit: Option<(usize, usize)>,
    active: bool,
}

impl TargetMemory {
    /// Inactive memory with no remembered hit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `coord` as the latest hit and enter targeting mode.
    /// Any earlier hit is forgotten.
    pub fn remember_hit(&mut self, coord: (usize, usize)) {
        self.last_hit = Some(coord);
        self.active = true;
    }

    /// Leave targeting mode. The last hit coordinate is kept but unused.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_hit(&self) -> Option<(usize, usize)> {
        self.last_hit
    }
}

/// First neighbour of `origin`, in `Direction::ORDER`, that is still a legal target.
pub fn probe_neighbours(board: &Board, origin: (usize, usize)) -> Option<(usize, usize)> {
    Direction::ORDER
        .iter()
        .filter_map(|d| d.step(origin))
        .find(|&(r, c)| is_valid_move(board, r, c))
}

/// Sample uniformly random cells until one is a legal target.
/// Returns `None` only when the board has no legal target left.
pub fn hunt<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    if !board.has_valid_target() {
        return None;
    }
    loop {
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        if is_valid_move(board, row, col) {
            return Some((row, col));
        }
    }
}

/// Choose this turn's target. While targeting, probe the neighbours of the
/// remembered hit; once all four are exhausted, deactivate and hunt instead
/// for the same turn.
pub fn select_target_coordinate<R: Rng + ?Sized>(
    board: &Board,
    memory: &mut TargetMemory,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if memory.is_active() {
        if let Some(origin) = memory.last_hit() {
            if let Some(coord) = probe_neighbours(board, origin) {
                log::debug!("targeting around {:?}: probing {:?}", origin, coord);
                return Some(coord);
            }
            log::debug!("neighbours of {:?} exhausted, back to hunting", origin);
        }
        memory.deactivate();
    }
    hunt(board, rng)
}
