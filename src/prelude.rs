//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, Difficulty, GameEngine, GameStatus, Mark, Move, MoveError, Outcome, Player,
};

#[cfg(feature = "std")]
pub use crate::{shared_input, CliPlayer, GameSession};
