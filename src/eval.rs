//! The pattern-weighted position score.
//!
//! A position is scored from player one's perspective by counting line
//! windows: wins short-circuit to a sentinel, everything else is a weighted
//! sum of threats. Player two's patterns subtract what player one's add, so
//! the score of a fair position is 0.

use crate::board::Board;
use crate::lines::{count, pattern, Pattern};

/// Score of a position player one has won. Player two's wins score the
/// negation. Every non-won position scores strictly inside `(-WIN, WIN)`.
pub const WIN: i32 = 1_000_000_000;

/// Weight of a window one piece short of a win.
const OPEN_THREE: i32 = 10_000;

/// Weight of a window holding two pieces and two empties.
const OPEN_TWO: i32 = 100;

const WIN_ONE: Pattern = pattern(b"1111");
const WIN_TWO: Pattern = pattern(b"2222");

const THREES_ONE: [Pattern; 2] = [pattern(b"1110"), pattern(b"0111")];
const THREES_TWO: [Pattern; 2] = [pattern(b"2220"), pattern(b"0222")];

// the split shapes appear twice and count double; 1100 and 0011 count
// once. Search behaviour is pinned to these exact weights.
const TWOS_ONE: [Pattern; 10] = [
    pattern(b"1100"),
    pattern(b"0011"),
    pattern(b"1001"),
    pattern(b"1001"),
    pattern(b"1010"),
    pattern(b"1010"),
    pattern(b"0110"),
    pattern(b"0110"),
    pattern(b"0101"),
    pattern(b"0101"),
];
const TWOS_TWO: [Pattern; 10] = [
    pattern(b"2200"),
    pattern(b"0022"),
    pattern(b"2002"),
    pattern(b"2002"),
    pattern(b"2020"),
    pattern(b"2020"),
    pattern(b"0220"),
    pattern(b"0220"),
    pattern(b"0202"),
    pattern(b"0202"),
];

/// Scores `board` from player one's perspective.
///
/// A board holding a player-one four-in-a-row scores exactly [`WIN`] and a
/// board holding a player-two one exactly `-WIN`, whatever else is on it.
/// Player one's win is checked first, so a (normally unreachable) board
/// where both players have four-in-a-row scores `WIN`.
pub fn evaluate(board: &Board) -> i32 {
    if count(board, WIN_ONE) > 0 {
        return WIN;
    }
    if count(board, WIN_TWO) > 0 {
        return -WIN;
    }

    let mut value = 0;
    for threat in THREES_ONE {
        value += OPEN_THREE * count(board, threat);
    }
    for threat in TWOS_ONE {
        value += OPEN_TWO * count(board, threat);
    }
    for threat in THREES_TWO {
        value -= OPEN_THREE * count(board, threat);
    }
    for threat in TWOS_TWO {
        value -= OPEN_TWO * count(board, threat);
    }
    value
}
