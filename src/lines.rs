//! Scanning the board for four-cell line patterns.
//!
//! Every contiguous run of four cells along a row, a column or a diagonal
//! is a window. [`count`] tallies the windows whose cells equal a given
//! pattern, counting every start position, so overlapping occurrences all
//! tally: a row of five player-one pieces contains two `1111` windows.

use crate::board::{Board, Cell};
use crate::{HEIGHT, WIDTH};

/// Cells in a window.
pub const PATTERN_LEN: usize = 4;

/// A line of four cells to search for, in reading order.
pub type Pattern = [Cell; PATTERN_LEN];

/// Builds a pattern from its digit form, e.g. `pattern(b"1110")`.
///
/// # Panics
/// Panics on digits other than `'0'`, `'1'` and `'2'`.
pub const fn pattern(digits: &[u8; PATTERN_LEN]) -> Pattern {
    let mut cells = [Cell::Empty; PATTERN_LEN];
    let mut i = 0;
    while i < PATTERN_LEN {
        cells[i] = match digits[i] {
            b'0' => Cell::Empty,
            b'1' => Cell::PlayerOne,
            b'2' => Cell::PlayerTwo,
            _ => panic!("pattern digits must be '0', '1' or '2'"),
        };
        i += 1;
    }
    cells
}

/// Counts the windows matching `pattern` across all four line directions.
pub fn count(board: &Board, pattern: Pattern) -> i32 {
    count_horizontal(board, pattern)
        + count_vertical(board, pattern)
        + count_diagonal_down(board, pattern)
        + count_diagonal_up(board, pattern)
}

fn matches_at(
    board: &Board,
    pattern: Pattern,
    row: usize,
    column: usize,
    row_step: isize,
    column_step: isize,
) -> bool {
    for (i, &cell) in pattern.iter().enumerate() {
        let row = (row as isize + i as isize * row_step) as usize;
        let column = (column as isize + i as isize * column_step) as usize;
        if board.get(row, column) != cell {
            return false;
        }
    }
    true
}

/// Rows, read left to right.
fn count_horizontal(board: &Board, pattern: Pattern) -> i32 {
    let mut total = 0;
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - PATTERN_LEN {
            if matches_at(board, pattern, row, column, 0, 1) {
                total += 1;
            }
        }
    }
    total
}

/// Columns, read top to bottom.
fn count_vertical(board: &Board, pattern: Pattern) -> i32 {
    let mut total = 0;
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - PATTERN_LEN {
            if matches_at(board, pattern, row, column, 1, 0) {
                total += 1;
            }
        }
    }
    total
}

/// Falling `\` diagonals, read from the top-left end downward.
fn count_diagonal_down(board: &Board, pattern: Pattern) -> i32 {
    let mut total = 0;
    for row in 0..=HEIGHT - PATTERN_LEN {
        for column in 0..=WIDTH - PATTERN_LEN {
            if matches_at(board, pattern, row, column, 1, 1) {
                total += 1;
            }
        }
    }
    total
}

/// Rising `/` diagonals, read from the top-right end downward.
///
/// The reading order only matters for asymmetric patterns: `1110` along a
/// rising diagonal means the empty cell sits at the lower-left end.
fn count_diagonal_up(board: &Board, pattern: Pattern) -> i32 {
    let mut total = 0;
    for row in 0..=HEIGHT - PATTERN_LEN {
        for column in PATTERN_LEN - 1..WIDTH {
            if matches_at(board, pattern, row, column, 1, -1) {
                total += 1;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_board_has_69_windows() {
        // 24 horizontal + 21 vertical + 12 falling + 12 rising
        assert_eq!(count(&Board::new(), pattern(b"0000")), 69);
    }

    #[test]
    fn overlapping_windows_all_count() -> anyhow::Result<()> {
        let board: Board = "0000000\n\
                            0000000\n\
                            0000000\n\
                            0000000\n\
                            0000000\n\
                            1111100"
            .parse()?;
        assert_eq!(count(&board, pattern(b"1111")), 2);
        Ok(())
    }

    #[test]
    fn vertical_lines_read_top_down() {
        let mut board = Board::new();
        for _ in 0..3 {
            board = board.drop_piece(0, Cell::PlayerOne);
        }
        // three pieces at the bottom of a column leave the empty cell on top
        assert_eq!(count(&board, pattern(b"0111")), 1);
        assert_eq!(count(&board, pattern(b"1110")), 0);
    }

    #[test]
    fn rising_diagonals_read_from_the_top_right() -> anyhow::Result<()> {
        // pieces at (0,3), (1,2), (2,1) with (3,0) empty
        let board: Board = "0001000\n\
                            0010000\n\
                            0100000\n\
                            0000000\n\
                            0000000\n\
                            0000000"
            .parse()?;
        assert_eq!(count(&board, pattern(b"1110")), 1);
        assert_eq!(count(&board, pattern(b"0111")), 0);
        Ok(())
    }

    #[test]
    fn falling_diagonals_are_found() -> anyhow::Result<()> {
        let board: Board = "0000000\n\
                            0000000\n\
                            0200000\n\
                            0020000\n\
                            0002000\n\
                            0000200"
            .parse()?;
        assert_eq!(count(&board, pattern(b"2222")), 1);
        Ok(())
    }
}
