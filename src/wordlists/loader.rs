//! Word list loading utilities
//!
//! Parses comma-separated word lists from files or from the embedded source.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

/// Minimum number of words a usable list must contain
pub const MIN_WORDS: usize = 1000;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read word list at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list must contain at least {required} words (found {found})")]
    TooFewWords { found: usize, required: usize },
}

/// Split a comma-separated word list into cleaned, lowercase words
///
/// A single trailing period terminates the list. Tokens are trimmed and empty
/// tokens are discarded. No minimum-size check happens here.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::parse_words;
///
/// let words = parse_words(" Apple, banana ,, Cherry.");
/// assert_eq!(words, vec!["apple", "banana", "cherry"]);
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<String> {
    let text = text.trim();
    let text = text.strip_suffix('.').unwrap_or(text);

    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Parse a word list and check that it is large enough to play with
///
/// # Errors
///
/// Returns [`WordListError::TooFewWords`] if fewer than [`MIN_WORDS`] words
/// survive cleaning.
pub fn words_from_text(text: &str) -> Result<Vec<String>, WordListError> {
    let words = parse_words(text);

    if words.len() < MIN_WORDS {
        return Err(WordListError::TooFewWords {
            found: words.len(),
            required: MIN_WORDS,
        });
    }

    Ok(words)
}

/// Load and validate words from a file
///
/// # Errors
///
/// Returns [`WordListError::NotFound`] if the file does not exist,
/// [`WordListError::Io`] if it cannot be read, and
/// [`WordListError::TooFewWords`] if the list is too short.
#[instrument]
pub fn load_from_file(path: &Path) -> Result<Vec<String>, WordListError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WordListError::NotFound(path.to_path_buf())
        } else {
            WordListError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let words = words_from_text(&content)?;
    debug!(count = words.len(), "parsed word list file");
    Ok(words)
}
