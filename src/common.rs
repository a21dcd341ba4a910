//! Common types for the game: board errors and attack results.

/// Result of resolving one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// The cell held a ship segment.
    Hit,
    /// The cell held open water.
    Miss,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Cell has already been resolved as a hit or a miss.
    AlreadyAttacked,
    /// Ship extends past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Every random placement attempt for this ship failed.
    PlacementExhausted { symbol: char },
    /// No attackable cell is left on the board.
    NoTargetsRemaining,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::AlreadyAttacked => write!(f, "Cell has already been attacked"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::PlacementExhausted { symbol } => {
                write!(f, "Unable to place ship '{}' after repeated attempts", symbol)
            }
            BoardError::NoTargetsRemaining => write!(f, "No valid targets remain on the board"),
        }
    }
}

impl core::error::Error for BoardError {}

/// One resolved attack: where it landed and what it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub row: usize,
    pub col: usize,
    pub result: AttackResult,
}
