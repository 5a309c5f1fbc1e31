//! Core game logic for hangman
//!
//! This module contains the round state, the guess state machine, and scoring.
//! Nothing here performs I/O.

mod guess;
mod score;
mod state;

pub use guess::{GuessOutcome, GuessResult};
pub use score::{PENALTY_PER_WRONG, POINTS_PER_LETTER, score};
pub use state::{DEFAULT_MAX_WRONG, GameState, GuessRecord, PLACEHOLDER};
