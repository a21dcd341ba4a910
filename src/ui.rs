//! Text rendering of boards.

use crate::board::{Board, Cell};
use core::fmt;

/// Renders a board as a digit-labelled grid. With `reveal` unset, unattacked
/// ship segments are drawn as water.
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl<'a> BoardView<'a> {
    /// Owner's view with every ship visible.
    pub fn revealed(board: &'a Board) -> Self {
        Self {
            board,
            reveal: true,
        }
    }

    /// Opponent's view with unattacked ships masked.
    pub fn masked(board: &'a Board) -> Self {
        Self {
            board,
            reveal: false,
        }
    }

    pub fn new(board: &'a Board, reveal: bool) -> Self {
        Self { board, reveal }
    }
}

/// Display character for a cell.
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Water => '~',
        Cell::Ship(symbol) => symbol,
        Cell::Hit => 'X',
        Cell::Miss => 'O',
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();
        write!(f, "   ")?;
        for c in 0..size {
            write!(f, " {} ", c)?;
        }
        writeln!(f)?;
        for r in 0..size {
            write!(f, " {} ", r)?;
            for c in 0..size {
                let cell = if self.reveal {
                    self.board.cell(r, c)
                } else {
                    self.board.masked_cell(r, c)
                };
                let cell = cell.map_err(|_| fmt::Error)?;
                write!(f, " {} ", cell_symbol(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
