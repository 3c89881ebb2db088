//! The game board: a 6x7 grid of cells filled from the bottom up.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use thiserror::Error;

use crate::{HEIGHT, WIDTH};

/// One tile of the board.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The disc belonging to the other player.
    ///
    /// # Panics
    /// Panics on [`Cell::Empty`], which belongs to nobody.
    pub fn opponent(&self) -> Cell {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => panic!("empty cells have no opponent"),
        }
    }
}

/// A move that cannot be played on the current board.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum MoveError {
    #[error("column {0} is out of range, columns run from 0 to {}", WIDTH - 1)]
    OutOfRange(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// A piece of text that does not describe a board.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[error("expected {} rows of cells, found {0}", HEIGHT)]
    BadRowCount(usize),
    #[error("row {row} has {length} cells, expected {}", WIDTH)]
    BadRowLength { row: usize, length: usize },
    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}")]
    BadCell {
        row: usize,
        column: usize,
        symbol: char,
    },
}

/// A Connect 4 position.
///
/// Rows are stored top-down: row 0 is the top of the board and the last row
/// to fill, row 5 the bottom and the first. Pieces stack from the bottom with
/// no gaps, so a column is full exactly when its row-0 cell is occupied.
///
/// `Board` is a small `Copy` value. The simulation methods return fresh
/// boards instead of mutating, so a search can hand the same position to
/// every branch without any of them seeing another's moves.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board by replaying a record of moves, e.g. `"334455"`.
    ///
    /// Each character is a 0-indexed column; players alternate starting with
    /// player one. Moves into full columns are rejected, finished games are
    /// not detected.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut cell = Cell::PlayerOne;

        for column_char in moves.as_ref().chars() {
            let column = column_char
                .to_digit(10)
                .map(|c| c as usize)
                .ok_or_else(|| anyhow!("could not parse '{}' as a valid move", column_char))?;
            board.play_checked(column, cell)?;
            cell = cell.opponent();
        }
        Ok(board)
    }

    /// The cell at `row` (0 = top) and `column` (0 = leftmost).
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// True when `column` cannot take another piece.
    ///
    /// # Panics
    /// Panics when `column >= WIDTH`.
    pub fn is_column_full(&self, column: usize) -> bool {
        !self.cells[0][column].is_empty()
    }

    /// True when no column can take another piece.
    ///
    /// Only the top row is inspected. This detects the packed, drawn-unless-
    /// already-won board; four-in-a-row wins are not its business and are
    /// read off the evaluation instead.
    pub fn is_complete(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Lists the columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..WIDTH)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Returns a new board with one `cell` piece dropped into `column`.
    ///
    /// The piece lands in the lowest empty row, found by scanning from the
    /// bottom row upward. Dropping into a full column returns the board
    /// unchanged; callers screen with [`is_column_full`] first.
    ///
    /// [`is_column_full`]: Board::is_column_full
    pub fn drop_piece(&self, column: usize, cell: Cell) -> Board {
        let mut next = *self;
        for row in (0..HEIGHT).rev() {
            if next.cells[row][column].is_empty() {
                next.cells[row][column] = cell;
                break;
            }
        }
        next
    }

    /// Verifies that `column` names a playable column.
    pub fn validate_column(&self, column: usize) -> Result<(), MoveError> {
        if column >= WIDTH {
            return Err(MoveError::OutOfRange(column));
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull(column));
        }
        Ok(())
    }

    /// Plays a move in place, rejecting unplayable columns.
    pub fn play_checked(&mut self, column: usize, cell: Cell) -> Result<(), MoveError> {
        self.validate_column(column)?;
        *self = self.drop_piece(column, cell);
        Ok(())
    }

    /// Returns the board with the two players' discs exchanged.
    pub fn swapped(&self) -> Board {
        let mut next = *self;
        for row in next.cells.iter_mut() {
            for cell in row.iter_mut() {
                if !cell.is_empty() {
                    *cell = cell.opponent();
                }
            }
        }
        next
    }

    /// Returns the board reflected left to right.
    pub fn mirrored(&self) -> Board {
        let mut next = *self;
        for row in next.cells.iter_mut() {
            row.reverse();
        }
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the textual encoding: 6 rows of 7 digits from {0, 1, 2},
    /// top row first. Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != HEIGHT {
            return Err(ParseBoardError::BadRowCount(lines.len()));
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != WIDTH {
                return Err(ParseBoardError::BadRowLength {
                    row,
                    length: line.chars().count(),
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                board.cells[row][column] = match symbol {
                    '0' => Cell::Empty,
                    '1' => Cell::PlayerOne,
                    '2' => Cell::PlayerTwo,
                    _ => return Err(ParseBoardError::BadCell { row, column, symbol }),
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for cell in cells {
                f.write_str(match cell {
                    Cell::Empty => "0",
                    Cell::PlayerOne => "1",
                    Cell::PlayerTwo => "2",
                })?;
            }
        }
        Ok(())
    }
}
