//! Hangman
//!
//! A console word-guessing game with scoring, persistent statistics, and
//! per-round transcripts.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GuessOutcome, score};
//!
//! let mut state = GameState::new("cat", 6);
//! state.process_guess("c");
//! state.process_guess("a");
//! let result = state.process_guess("t");
//!
//! assert_eq!(result.outcome, GuessOutcome::Win);
//! assert_eq!(score(state.word_len(), state.wrong_count()), 30);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Statistics and round logs
pub mod records;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod telemetry;
