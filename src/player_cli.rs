#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{AttackResult, BoardError},
    config::BOARD_SIZE,
    ui::BoardView,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Why a line of player input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not two whitespace-separated integers.
    Malformed(String),
    OutOfBounds { row: i64, col: i64 },
    AlreadyAttacked { row: usize, col: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed(line) => {
                write!(f, "Could not read '{}' - enter a row and a column, e.g. 3 7", line)
            }
            InputError::OutOfBounds { row, col } => write!(
                f,
                "({}, {}) is off the board - rows and columns run 0-{}",
                row,
                col,
                BOARD_SIZE - 1
            ),
            InputError::AlreadyAttacked { row, col } => {
                write!(f, "({}, {}) has already been attacked", row, col)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse "row col" into board coordinates.
pub fn parse_coordinates(line: &str) -> Result<(usize, usize), InputError> {
    let malformed = || InputError::Malformed(line.trim().to_string());
    let mut parts = line.split_whitespace();
    let row: i64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(malformed)?;
    let col: i64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }
    let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| v < BOARD_SIZE as usize);
    match (in_range(row), in_range(col)) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(InputError::OutOfBounds { row, col }),
    }
}

/// Parse a line and check it against the opponent board.
pub fn read_target(line: &str, opponent: &Board) -> Result<(usize, usize), InputError> {
    let (row, col) = parse_coordinates(line)?;
    match opponent.check_target(row, col) {
        Ok(()) => Ok((row, col)),
        Err(BoardError::AlreadyAttacked) => Err(InputError::AlreadyAttacked { row, col }),
        Err(_) => Err(InputError::OutOfBounds {
            row: row as i64,
            col: col as i64,
        }),
    }
}

/// Human player reading coordinates from a line-oriented input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    reveal_opponent: bool,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process stdin and stdout.
    pub fn new(reveal_opponent: bool) -> Self {
        Self::with_io(io::stdin().lock(), io::stdout(), reveal_opponent)
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W, reveal_opponent: bool) -> Self {
        Self {
            input,
            output,
            reveal_opponent,
        }
    }

    /// Consume the player and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print both grids: own fleet in full, the opponent masked unless revealing.
    pub fn print_view(&mut self, own: &Board, opponent: &Board) -> io::Result<()> {
        writeln!(self.output, "\nYour Grid:")?;
        write!(self.output, "{}", BoardView::revealed(own))?;
        writeln!(self.output, "\nEnemy Grid:")?;
        write!(
            self.output,
            "{}",
            BoardView::new(opponent, self.reveal_opponent)
        )
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Board,
        opponent: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        self.print_view(own, opponent)?;
        loop {
            write!(self.output, "Enter your attack coordinates (row and column): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before the game finished");
            }
            match read_target(&line, opponent) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    log::debug!("rejected input {:?}: {}", line.trim(), e);
                    writeln!(self.output, "Invalid move. {}. Try again.", e)?;
                }
            }
        }
    }

    fn handle_attack_result(
        &mut self,
        _coord: (usize, usize),
        result: AttackResult,
    ) -> anyhow::Result<()> {
        match result {
            AttackResult::Hit => writeln!(self.output, "Hit!")?,
            AttackResult::Miss => writeln!(self.output, "You missed!")?,
        }
        Ok(())
    }

    fn handle_opponent_attack(
        &mut self,
        coord: (usize, usize),
        result: AttackResult,
    ) -> anyhow::Result<()> {
        match result {
            AttackResult::Hit => {
                writeln!(self.output, "AI hit a ship at {}, {}!", coord.0, coord.1)?
            }
            AttackResult::Miss => writeln!(self.output, "AI missed at {}, {}", coord.0, coord.1)?,
        }
        Ok(())
    }
}
