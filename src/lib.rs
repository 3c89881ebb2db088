//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent picks moves with a fixed-depth minimax search over a
//! pattern-based evaluation of the board, pruning with alpha-beta bounds.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four_engine::{board::Board, engine::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board: Board = "0000000\n\
//!                     0000000\n\
//!                     0000000\n\
//!                     0000000\n\
//!                     0000000\n\
//!                     1110000"
//!     .parse()?;
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.select_move(&board), 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod lines;

pub mod eval;

pub mod engine;

pub mod player;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that the given dimensions leave room for a four-in-a-row
const_assert!(WIDTH >= 4);
const_assert!(HEIGHT >= 4);
