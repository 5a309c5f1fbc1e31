//! Round state
//!
//! A `GameState` holds everything that changes while a single secret word is
//! being guessed: the revealed pattern, tried letters, and the wrong count.

use chrono::{DateTime, Local};
use rustc_hash::FxHashSet;

/// Marker shown for letters that have not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Default number of wrong guesses allowed per round
pub const DEFAULT_MAX_WRONG: usize = 6;

/// One entry of the guess history: the normalized input and its outcome label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub input: String,
    pub label: String,
}

impl GuessRecord {
    pub(crate) fn new(input: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            label: label.into(),
        }
    }

    /// Whether this guess counted against the player
    #[must_use]
    pub fn is_wrong(&self) -> bool {
        self.label.contains("Wrong")
    }
}

/// Mutable state of one hangman round
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) word: String,
    pub(crate) max_wrong: usize,
    pub(crate) wrong_count: usize,
    pub(crate) revealed: Vec<char>,
    pub(crate) guessed_letters: FxHashSet<char>,
    pub(crate) correct_letters: FxHashSet<char>,
    pub(crate) unique_letters: FxHashSet<char>,
    pub(crate) guess_history: Vec<GuessRecord>,
    started_at: DateTime<Local>,
}

impl GameState {
    /// Start a round for `word` with the given wrong-guess budget
    ///
    /// The word is lower-cased. Non-alphabetic characters are revealed from the
    /// start and never need to be guessed.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GameState;
    ///
    /// let state = GameState::new("Ice-Cream", 6);
    /// assert_eq!(state.progress(), "_ _ _ - _ _ _ _ _");
    /// assert_eq!(state.remaining_attempts(), 6);
    /// ```
    #[must_use]
    pub fn new(word: &str, max_wrong: usize) -> Self {
        let word = word.to_lowercase();
        let revealed = word
            .chars()
            .map(|c| if c.is_alphabetic() { PLACEHOLDER } else { c })
            .collect();
        let unique_letters = word.chars().filter(|c| c.is_alphabetic()).collect();

        Self {
            word,
            max_wrong,
            wrong_count: 0,
            revealed,
            guessed_letters: FxHashSet::default(),
            correct_letters: FxHashSet::default(),
            unique_letters,
            guess_history: Vec::new(),
            started_at: Local::now(),
        }
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Length of the secret word in characters
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    #[inline]
    #[must_use]
    pub const fn max_wrong(&self) -> usize {
        self.max_wrong
    }

    #[inline]
    #[must_use]
    pub const fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    /// Revealed pattern, one slot per character of the word
    #[must_use]
    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    /// Guess history in the order guesses were made
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.guess_history
    }

    /// When the round started
    #[must_use]
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Revealed pattern with slots separated by spaces, e.g. `c _ t`
    #[must_use]
    pub fn progress(&self) -> String {
        let mut out = String::with_capacity(self.revealed.len() * 2);
        for (i, c) in self.revealed.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }

    /// Letters tried so far, sorted alphabetically
    #[must_use]
    pub fn guessed_letters_sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed_letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Whether `letter` has been tried already
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    /// Wrong guesses left before the round is lost
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.max_wrong.saturating_sub(self.wrong_count)
    }

    /// Every distinct letter of the word has been confirmed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.correct_letters == self.unique_letters
    }

    /// The wrong-guess budget is used up
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.wrong_count >= self.max_wrong
    }

    /// Reveal every unrevealed occurrence of `letter`
    ///
    /// Returns how many slots were newly revealed. A non-zero count also marks
    /// the letter as correct.
    pub fn reveal_letter(&mut self, letter: char) -> usize {
        let mut count = 0;
        for (slot, ch) in self.revealed.iter_mut().zip(self.word.chars()) {
            if ch == letter && *slot == PLACEHOLDER {
                *slot = letter;
                count += 1;
            }
        }

        if count > 0 {
            self.correct_letters.insert(letter);
        }
        count
    }

    /// Reveal every alphabetic slot and mark all letters correct
    pub(crate) fn reveal_all(&mut self) {
        for (slot, ch) in self.revealed.iter_mut().zip(self.word.chars()) {
            if ch.is_alphabetic() {
                *slot = ch;
            }
        }
        self.correct_letters.clone_from(&self.unique_letters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_masks_letters() {
        let state = GameState::new("cat", DEFAULT_MAX_WRONG);
        assert_eq!(state.revealed(), &['_', '_', '_']);
        assert_eq!(state.progress(), "_ _ _");
        assert_eq!(state.wrong_count(), 0);
        assert!(!state.is_won());
        assert!(!state.is_lost());
    }

    #[test]
    fn new_state_lowercases_word() {
        let state = GameState::new("CaT", DEFAULT_MAX_WRONG);
        assert_eq!(state.word(), "cat");
    }

    #[test]
    fn new_state_shows_non_alphabetic() {
        let state = GameState::new("t-rex", DEFAULT_MAX_WRONG);
        assert_eq!(state.progress(), "_ - _ _ _");
        assert_eq!(state.unique_letters.len(), 4);
    }

    #[test]
    fn reveal_letter_counts_all_positions() {
        let mut state = GameState::new("banana", DEFAULT_MAX_WRONG);
        assert_eq!(state.reveal_letter('a'), 3);
        assert_eq!(state.progress(), "_ a _ a _ a");
        assert!(state.correct_letters.contains(&'a'));
    }

    #[test]
    fn reveal_letter_absent() {
        let mut state = GameState::new("banana", DEFAULT_MAX_WRONG);
        assert_eq!(state.reveal_letter('z'), 0);
        assert!(state.correct_letters.is_empty());
    }

    #[test]
    fn reveal_letter_twice_returns_zero() {
        let mut state = GameState::new("banana", DEFAULT_MAX_WRONG);
        state.reveal_letter('n');
        assert_eq!(state.reveal_letter('n'), 0);
        assert!(state.correct_letters.contains(&'n'));
    }

    #[test]
    fn won_independent_of_order() {
        let orders: [&[char]; 3] = [&['c', 'a', 't'], &['t', 'c', 'a'], &['a', 't', 'c']];
        for order in orders {
            let mut state = GameState::new("cat", DEFAULT_MAX_WRONG);
            for (i, &letter) in order.iter().enumerate() {
                state.reveal_letter(letter);
                assert_eq!(state.is_won(), i == order.len() - 1);
            }
        }
    }

    #[test]
    fn won_ignores_non_alphabetic() {
        let mut state = GameState::new("a-b", DEFAULT_MAX_WRONG);
        state.reveal_letter('a');
        state.reveal_letter('b');
        assert!(state.is_won());
    }

    #[test]
    fn reveal_all_wins() {
        let mut state = GameState::new("o'clock", DEFAULT_MAX_WRONG);
        state.reveal_all();
        assert_eq!(state.progress(), "o ' c l o c k");
        assert!(state.is_won());
    }

    #[test]
    fn remaining_attempts_saturates() {
        let mut state = GameState::new("cat", 2);
        state.wrong_count = 3;
        assert_eq!(state.remaining_attempts(), 0);
        assert!(state.is_lost());
    }

    #[test]
    fn guessed_letters_sorted_alphabetically() {
        let mut state = GameState::new("cat", DEFAULT_MAX_WRONG);
        state.guessed_letters.extend(['t', 'a', 'q']);
        assert_eq!(state.guessed_letters_sorted(), vec!['a', 'q', 't']);
    }

    #[test]
    fn guess_record_wrong_detection() {
        assert!(GuessRecord::new("x", "Wrong").is_wrong());
        assert!(GuessRecord::new("dog", "Wrong (full word)").is_wrong());
        assert!(!GuessRecord::new("c", "Correct").is_wrong());
        assert!(!GuessRecord::new("c", "Repeated").is_wrong());
    }
}
