//! Ship definitions and placement geometry.

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along columns from the origin.
    Horizontal,
    /// Extends along rows from the origin.
    Vertical,
}

/// Type of ship: name, board symbol and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    symbol: char,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, symbol: char, length: usize) -> Self {
        Self {
            name,
            symbol,
            length,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Symbol written into every cell the ship occupies.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Origin and orientation of one ship. Only lives until it is written into a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Cells covered by a ship of `length` starting at this origin.
    /// Cells are produced even when they fall past the edge of the grid.
    pub fn cells(&self, length: usize) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col.saturating_add(i)),
            Orientation::Vertical => (row.saturating_add(i), col),
        })
    }

    /// Ensure a ship of `length` fits within the grid from this origin.
    pub fn check_bounds(&self, length: usize) -> Result<(), BoardError> {
        let fits = match self.orientation {
            Orientation::Horizontal => self.row < N && self.col < N && length <= N - self.col,
            Orientation::Vertical => self.col < N && self.row < N && length <= N - self.row,
        };
        if fits {
            Ok(())
        } else {
            Err(BoardError::ShipOutOfBounds)
        }
    }
}
