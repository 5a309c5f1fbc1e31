//! Guess processing
//!
//! Classifies free-form player input and applies it to a [`GameState`].
//!
//! Input is trimmed and lower-cased, then matched against these rules in
//! order (first match wins):
//!
//! 1. empty input
//! 2. the whole secret word
//! 3. a wrong word of the same length as the secret (costs one attempt)
//! 4. a run of letters, each tried as a single-letter guess
//! 5. a single letter
//! 6. anything else is rejected without touching the state

use super::state::{GameState, GuessRecord};
use std::fmt;
use tracing::debug;

/// What the caller should do after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Round still in progress
    Continue,
    /// All letters revealed
    Win,
    /// Wrong-guess budget exhausted
    Lose,
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
        }
    }
}

/// Message for the player plus the resulting round outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub message: String,
    pub outcome: GuessOutcome,
}

impl GuessResult {
    fn new(message: impl Into<String>, outcome: GuessOutcome) -> Self {
        Self {
            message: message.into(),
            outcome,
        }
    }

    fn proceed(message: impl Into<String>) -> Self {
        Self::new(message, GuessOutcome::Continue)
    }
}

fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

impl GameState {
    /// Apply one raw player input to the round
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GuessOutcome};
    ///
    /// let mut state = GameState::new("cat", 6);
    /// assert_eq!(state.process_guess("c").outcome, GuessOutcome::Continue);
    /// assert_eq!(state.process_guess(" CAT ").outcome, GuessOutcome::Win);
    /// ```
    pub fn process_guess(&mut self, input: &str) -> GuessResult {
        let s = input.trim().to_lowercase();
        let len = s.chars().count();

        let result = if s.is_empty() {
            GuessResult::proceed("Empty input. Try again.")
        } else if len > 1 && s == self.word {
            self.guess_full_word_correct(s)
        } else if len > 1 && is_alphabetic(&s) && len == self.word_len() {
            self.guess_full_word_wrong(s)
        } else if len > 1 && is_alphabetic(&s) {
            self.guess_sequence(&s)
        } else if let Some(letter) = s.chars().next().filter(|c| len == 1 && c.is_alphabetic()) {
            self.guess_letter(letter)
        } else {
            GuessResult::proceed("Invalid input. Use letters or full words only.")
        };

        debug!(
            input,
            outcome = %result.outcome,
            wrong = self.wrong_count,
            "processed guess"
        );
        result
    }

    fn guess_full_word_correct(&mut self, s: String) -> GuessResult {
        self.reveal_all();
        self.guess_history.push(GuessRecord::new(s, "Correct (full word)"));
        GuessResult::new("🎯 Correct! Full word guessed!", GuessOutcome::Win)
    }

    fn guess_full_word_wrong(&mut self, s: String) -> GuessResult {
        self.wrong_count += 1;
        self.guess_history.push(GuessRecord::new(s, "Wrong (full word)"));
        let outcome = if self.is_lost() {
            GuessOutcome::Lose
        } else {
            GuessOutcome::Continue
        };
        GuessResult::new("❌ Wrong full-word guess!", outcome)
    }

    fn guess_sequence(&mut self, s: &str) -> GuessResult {
        let mut wrong_added = 0;
        for letter in s.chars() {
            if self.guessed_letters.insert(letter) && self.reveal_letter(letter) == 0 {
                self.wrong_count += 1;
                wrong_added += 1;
            }
        }

        // Sequences are not recorded in the guess history
        let msg = format!("Processed sequence '{s}'. {wrong_added} wrong guesses added.");

        if self.is_won() {
            GuessResult::new(msg + " You win!", GuessOutcome::Win)
        } else if self.is_lost() {
            GuessResult::new(msg + " You lose!", GuessOutcome::Lose)
        } else {
            GuessResult::proceed(msg)
        }
    }

    fn guess_letter(&mut self, letter: char) -> GuessResult {
        if !self.guessed_letters.insert(letter) {
            self.guess_history.push(GuessRecord::new(letter, "Repeated"));
            return GuessResult::proceed(format!("'{letter}' already guessed."));
        }

        if self.reveal_letter(letter) > 0 {
            self.guess_history.push(GuessRecord::new(letter, "Correct"));
            let msg = format!("Correct! '{letter}' revealed.");
            if self.is_won() {
                return GuessResult::new(msg + " You win!", GuessOutcome::Win);
            }
            return GuessResult::proceed(msg);
        }

        self.wrong_count += 1;
        self.guess_history.push(GuessRecord::new(letter, "Wrong"));
        let msg = format!("Wrong! '{letter}' not in word.");
        if self.is_lost() {
            return GuessResult::new(msg + " You lose!", GuessOutcome::Lose);
        }
        GuessResult::proceed(msg)
    }
}
