//! Round scoring

/// Points per letter of the secret word
pub const POINTS_PER_LETTER: usize = 10;

/// Points deducted per wrong guess
pub const PENALTY_PER_WRONG: usize = 5;

/// Score a won round: `max(word_len * 10 - wrong_count * 5, 0)`
///
/// Lost rounds always score 0 and never go through this function.
///
/// # Examples
/// ```
/// use hangman::core::score;
///
/// assert_eq!(score(3, 0), 30);
/// assert_eq!(score(5, 4), 30);
/// assert_eq!(score(2, 10), 0);
/// ```
#[must_use]
pub const fn score(word_len: usize, wrong_count: usize) -> usize {
    (word_len * POINTS_PER_LETTER).saturating_sub(wrong_count * PENALTY_PER_WRONG)
}
