//! Depth-bounded minimax move selection with alpha-beta pruning.

use anyhow::{anyhow, Result};
use rayon::prelude::*;

use crate::board::{Board, Cell};
use crate::eval::{evaluate, WIN};
use crate::WIDTH;

/// Plies searched beyond each candidate move.
pub const DEFAULT_DEPTH: u32 = 4;

/// Whose turn it is inside the search tree.
///
/// The engine maximises for the side it is choosing a move for and
/// minimises for the reply.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    /// The disc this side drops: the maximising side plays player one's
    /// discs, its opponent player two's.
    pub fn cell(self) -> Cell {
        match self {
            Side::Max => Cell::PlayerOne,
            Side::Min => Cell::PlayerTwo,
        }
    }
}

/// A move chooser for the player holding player one's discs.
pub struct Engine {
    depth: u32,
    /// The number of positions evaluated during the last search, for
    /// diagnostics only.
    pub node_count: usize,
}

impl Engine {
    /// An engine searching to the standard depth.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// An engine searching `depth` plies beyond each candidate move.
    /// `with_depth(0)` plays the move whose immediate position scores
    /// highest.
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            node_count: 0,
        }
    }

    /// Chooses a column for player one to play.
    ///
    /// Candidate columns are tried in ascending order, skipping full ones,
    /// and each candidate's reply search is seeded with the running best
    /// value as its alpha bound. A later candidate replaces an earlier one
    /// only by strictly beating it, so ties keep the lowest column.
    ///
    /// The board is expected to have at least one open column; on a
    /// completely full board there is nothing to choose and column 0 is
    /// returned.
    pub fn select_move(&mut self, board: &Board) -> usize {
        self.node_count = 0;

        let mut best_value = i32::MIN;
        let mut best_column = 0;
        for column in 0..WIDTH {
            if board.is_column_full(column) {
                continue;
            }
            let child = board.drop_piece(column, Side::Max.cell());
            let value = self.minimax(child, Side::Min, best_value, i32::MAX, self.depth);
            if value > best_value {
                best_value = value;
                best_column = column;
            }
        }
        best_column
    }

    /// Searches the candidate columns in parallel, one task per open
    /// column, choosing the same column [`select_move`] does.
    ///
    /// Every candidate is searched over the full alpha-beta window instead
    /// of one tightened by earlier siblings. A candidate the sequential
    /// search cuts short has already failed to beat the running best, and
    /// searching it further can only confirm that, so the argmax comes out
    /// the same. The redundant work is the price of the parallelism.
    ///
    /// [`select_move`]: Engine::select_move
    pub fn select_move_parallel(&mut self, board: &Board) -> usize {
        let depth = self.depth;
        let results: Vec<(usize, i32, usize)> = board
            .open_columns()
            .into_par_iter()
            .map(|column| {
                let mut worker = Engine::with_depth(depth);
                let child = board.drop_piece(column, Side::Max.cell());
                let value = worker.minimax(child, Side::Min, i32::MIN, i32::MAX, depth);
                (column, value, worker.node_count)
            })
            .collect();

        self.node_count = results.iter().map(|&(_, _, nodes)| nodes).sum();

        let mut best_value = i32::MIN;
        let mut best_column = 0;
        for &(column, value, _) in &results {
            if value > best_value {
                best_value = value;
                best_column = column;
            }
        }
        best_column
    }

    /// Move selection against an opponent that plays uniformly at random.
    pub fn expectimax_move(&mut self, _board: &Board) -> Result<usize> {
        Err(anyhow!("expectimax move selection is not implemented"))
    }

    fn minimax(
        &mut self,
        board: Board,
        to_move: Side,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
    ) -> i32 {
        self.node_count += 1;

        // won and packed boards are terminal at any depth
        let value = evaluate(&board);
        if depth == 0 || board.is_complete() || value.abs() >= WIN {
            return value;
        }

        match to_move {
            Side::Max => {
                for column in 0..WIDTH {
                    if board.is_column_full(column) {
                        continue;
                    }
                    let child = board.drop_piece(column, to_move.cell());
                    let value = self.minimax(child, to_move.opponent(), alpha, beta, depth - 1);
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        break;
                    }
                }
                alpha
            }
            Side::Min => {
                for column in 0..WIDTH {
                    if board.is_column_full(column) {
                        continue;
                    }
                    let child = board.drop_piece(column, to_move.cell());
                    let value = self.minimax(child, to_move.opponent(), alpha, beta, depth - 1);
                    beta = beta.min(value);
                    if alpha >= beta {
                        break;
                    }
                }
                beta
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
