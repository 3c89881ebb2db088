//! The players a game can seat: engine, random and human.

use std::io;
use std::io::Write;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell};
use crate::engine::Engine;

/// Anything that can take a turn.
pub trait Player {
    /// Chooses a column to play on `board`.
    fn next_move(&mut self, board: &Board) -> Result<usize>;

    /// A short label for game transcripts, e.g. `"ai"`.
    fn name(&self) -> &str;
}

/// Plays the engine's choice for whichever seat it holds.
///
/// The engine maximises for player one's discs, so when this player holds
/// player two's it hands the engine a disc-swapped copy of the board. The
/// chosen column applies to the real board unchanged.
pub struct SearchPlayer {
    discs: Cell,
    engine: Engine,
}

impl SearchPlayer {
    /// # Panics
    /// Panics when `discs` is [`Cell::Empty`].
    pub fn new(discs: Cell) -> Self {
        assert!(!discs.is_empty(), "a player needs discs to play");
        Self {
            discs,
            engine: Engine::new(),
        }
    }
}

impl Player for SearchPlayer {
    fn next_move(&mut self, board: &Board) -> Result<usize> {
        let board = match self.discs {
            Cell::PlayerTwo => board.swapped(),
            _ => *board,
        };
        Ok(self.engine.select_move(&board))
    }

    fn name(&self) -> &str {
        "ai"
    }
}

/// Plays a uniformly random open column.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A player with a reproducible move sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn next_move(&mut self, board: &Board) -> Result<usize> {
        let open = board.open_columns();
        if open.is_empty() {
            return Err(anyhow!("no open columns left to play"));
        }
        Ok(open[self.rng.random_range(0..open.len())])
    }

    fn name(&self) -> &str {
        "random"
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Asks the person at the terminal, re-prompting until they name an open
/// column.
pub struct ConsolePlayer;

impl Player for ConsolePlayer {
    fn next_move(&mut self, board: &Board) -> Result<usize> {
        loop {
            print!("Enter your move: ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            match input.trim().parse::<usize>() {
                Ok(column) if board.validate_column(column).is_ok() => return Ok(column),
                _ => println!("Column full, choose from: {:?}", board.open_columns()),
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}
