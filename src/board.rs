//! Game board state: a fixed grid of water, ship, hit and miss cells.

use crate::common::{AttackResult, BoardError};
use crate::config::BOARD_SIZE;
use crate::ship::{Placement, ShipType};
use crate::ui::cell_symbol;
use core::fmt;

const N: usize = BOARD_SIZE as usize;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    /// Unattacked ship segment carrying its ship's symbol.
    Ship(char),
    Hit,
    Miss,
}

impl Cell {
    /// `true` once the cell has been attacked.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// One side's grid. Cells only ever move `Water -> Miss` or `Ship -> Hit`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board of open water.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Water; N]; N],
        }
    }

    /// Reset every cell to water.
    pub fn initialize(&mut self) {
        self.cells = [[Cell::Water; N]; N];
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        N
    }

    /// Cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(BoardError::OutOfBounds)
    }

    /// Cell as the opponent sees it: unattacked ship segments read as water.
    pub fn masked_cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        match self.cell(row, col)? {
            Cell::Ship(_) => Ok(Cell::Water),
            other => Ok(other),
        }
    }

    /// Why (row, col) cannot be attacked, if it cannot.
    pub fn check_target(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.cell(row, col)?.is_resolved() {
            return Err(BoardError::AlreadyAttacked);
        }
        Ok(())
    }

    /// `true` iff (row, col) is on the grid and not yet hit or missed.
    pub fn is_valid_target(&self, row: usize, col: usize) -> bool {
        self.check_target(row, col).is_ok()
    }

    /// `true` while at least one cell can still be attacked.
    pub fn has_valid_target(&self) -> bool {
        self.cells.iter().flatten().any(|c| !c.is_resolved())
    }

    /// Resolve an attack at (row, col). Resolved or off-grid cells are rejected
    /// and the board is left untouched.
    pub fn apply_attack(&mut self, row: usize, col: usize) -> Result<AttackResult, BoardError> {
        self.check_target(row, col)?;
        let cell = &mut self.cells[row][col];
        match *cell {
            Cell::Ship(_) => {
                *cell = Cell::Hit;
                Ok(AttackResult::Hit)
            }
            _ => {
                *cell = Cell::Miss;
                Ok(AttackResult::Miss)
            }
        }
    }

    /// Returns `true` when no unattacked ship segment remains.
    pub fn is_fully_resolved(&self) -> bool {
        !self
            .cells
            .iter()
            .flatten()
            .any(|c| matches!(c, Cell::Ship(_)))
    }

    /// Number of unattacked ship segments.
    pub fn ship_cell_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Ship(_)))
            .count()
    }

    /// Number of cells holding `symbol`.
    pub fn symbol_count(&self, symbol: char) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Ship(symbol))
            .count()
    }

    /// `Ok` when `ship` fits at `placement` entirely over water.
    pub fn check_placement(&self, ship: &ShipType, placement: &Placement) -> Result<(), BoardError> {
        placement.check_bounds(ship.length())?;
        for (r, c) in placement.cells(ship.length()) {
            if self.cells[r][c] != Cell::Water {
                return Err(BoardError::ShipOverlaps);
            }
        }
        Ok(())
    }

    /// Write `ship` into the grid at `placement`.
    pub fn place(&mut self, ship: &ShipType, placement: &Placement) -> Result<(), BoardError> {
        self.check_placement(ship, placement)?;
        for (r, c) in placement.cells(ship.length()) {
            self.cells[r][c] = Cell::Ship(ship.symbol());
        }
        Ok(())
    }

    /// Row-major iterator over every cell with its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, cell)| ((r, c), *cell)))
    }
}

/// Move validator shared by the human and AI attack paths.
pub fn is_valid_move(board: &Board, row: usize, col: usize) -> bool {
    board.is_valid_target(row, col)
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                write!(f, "{}", cell_symbol(*cell))?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
