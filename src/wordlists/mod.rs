//! Word lists for hangman
//!
//! Provides the validated pool of secret words and random selection from it.

mod embedded;
pub mod loader;

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::Path;

pub use embedded::WORDS_SOURCE;
pub use loader::{MIN_WORDS, WordListError};

/// A validated pool of candidate secret words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load the word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::TooFewWords`] if the embedded list is too short.
    pub fn embedded() -> Result<Self, WordListError> {
        loader::words_from_text(WORDS_SOURCE).map(|words| Self { words })
    }

    /// Build a pool from already-cleaned words
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::TooFewWords`] if fewer than [`MIN_WORDS`] are given.
    pub fn from_words(words: Vec<String>) -> Result<Self, WordListError> {
        if words.len() < MIN_WORDS {
            return Err(WordListError::TooFewWords {
                found: words.len(),
                required: MIN_WORDS,
            });
        }
        Ok(Self { words })
    }

    /// Load a word list from a file
    ///
    /// # Errors
    ///
    /// See [`loader::load_from_file`].
    pub fn from_file(path: &Path) -> Result<Self, WordListError> {
        loader::load_from_file(path).map(|words| Self { words })
    }

    /// Number of words in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool is empty (never true for a validated list)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick a word uniformly at random
    ///
    /// Each call is independent, so the same word may come up in consecutive rounds.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}
