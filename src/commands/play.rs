//! Interactive game session
//!
//! Runs rounds against random words until the player quits or declines
//! another round. Statistics are saved and a transcript is written after every
//! round that ends in a win or a loss.

use crate::core::{DEFAULT_MAX_WRONG, GameState, GuessOutcome, score};
use crate::output::{
    show_message, show_new_round, show_round_end, show_state, show_warning, show_welcome,
};
use crate::records::{RoundLogger, RoundReport, StatisticsRecord, StatisticsStore};
use crate::wordlists::WordList;
use anyhow::{Result, bail};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Default directory for statistics and round logs
pub const DEFAULT_LOG_DIR: &str = "game_log";

/// Statistics file name inside the log directory
pub const STATS_FILE_NAME: &str = "stats.json";

const GUESS_PROMPT: &str = "Enter a letter(s) or full word ('quit' to exit): ";
const REPLAY_PROMPT: &str = "\nDo you want to play another word? (y/n): ";
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Configuration for a game session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wrong guesses allowed per round
    pub max_wrong: usize,
    /// Directory holding `stats.json` and the per-round log directories
    pub log_dir: PathBuf,
}

impl SessionConfig {
    #[must_use]
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            max_wrong: DEFAULT_MAX_WRONG,
            log_dir: log_dir.into(),
        }
    }

    #[must_use]
    pub fn with_max_wrong(mut self, max_wrong: usize) -> Self {
        self.max_wrong = max_wrong;
        self
    }

    /// Location of the statistics file
    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.log_dir.join(STATS_FILE_NAME)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Path::new(DEFAULT_LOG_DIR))
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Won,
    Lost,
    /// Player left mid-round; nothing was recorded
    Quit,
}

/// A game session reading player input from `R` and writing to `W`
pub struct Session<'a, R, W> {
    words: &'a WordList,
    store: StatisticsStore,
    logger: RoundLogger,
    max_wrong: usize,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    #[must_use]
    pub fn new(words: &'a WordList, config: &SessionConfig, input: R, output: W) -> Self {
        Self {
            words,
            store: StatisticsStore::new(config.stats_path()),
            logger: RoundLogger::new(&config.log_dir),
            max_wrong: config.max_wrong,
            input,
            output,
        }
    }

    /// Play rounds until the player stops
    ///
    /// Returns the statistics as of the end of the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the statistics file is malformed or cannot be
    /// saved, or if console I/O fails. Failing to write a round log is only
    /// reported as a warning.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<StatisticsRecord> {
        let mut stats = self.store.load()?;
        show_welcome(&mut self.output)?;

        loop {
            let (updated, end) = self.play_round(stats, rng)?;
            stats = updated;

            if end == RoundEnd::Quit {
                show_message(&mut self.output, "Thank you for playing Hangman! 🎮")?;
                break;
            }

            let again = self.prompt(REPLAY_PROMPT)?.unwrap_or_default().to_lowercase();
            if !matches!(again.as_str(), "y" | "yes") {
                show_message(&mut self.output, "Goodbye! 👋 Your progress has been saved.")?;
                break;
            }
        }

        Ok(stats)
    }

    /// Play one round against a random word
    ///
    /// # Errors
    ///
    /// See [`Session::run`].
    #[instrument(skip_all)]
    pub fn play_round<G: Rng + ?Sized>(
        &mut self,
        stats: StatisticsRecord,
        rng: &mut G,
    ) -> Result<(StatisticsRecord, RoundEnd)> {
        let Some(secret) = self.words.pick(rng) else {
            bail!("word list is empty");
        };
        let mut state = GameState::new(secret, self.max_wrong);
        info!(length = state.word_len(), "new round");

        show_new_round(&mut self.output, state.word_len())?;
        show_state(&mut self.output, &state)?;

        loop {
            let Some(input) = self.prompt(GUESS_PROMPT)? else {
                show_message(&mut self.output, "Exiting the current round.")?;
                return Ok((stats, RoundEnd::Quit));
            };

            if input.is_empty() {
                show_message(&mut self.output, "Please enter something.")?;
                continue;
            }

            if QUIT_WORDS.contains(&input.to_lowercase().as_str()) {
                show_message(&mut self.output, "Exiting the current round.")?;
                info!(word = state.word(), "round abandoned");
                return Ok((stats, RoundEnd::Quit));
            }

            let result = state.process_guess(&input);
            show_message(&mut self.output, &result.message)?;
            show_state(&mut self.output, &state)?;

            match result.outcome {
                GuessOutcome::Continue => {}
                GuessOutcome::Win => {
                    let stats = self.finish_round(&state, stats, true)?;
                    return Ok((stats, RoundEnd::Won));
                }
                GuessOutcome::Lose => {
                    let stats = self.finish_round(&state, stats, false)?;
                    return Ok((stats, RoundEnd::Lost));
                }
            }
        }
    }

    fn finish_round(
        &mut self,
        state: &GameState,
        stats: StatisticsRecord,
        won: bool,
    ) -> Result<StatisticsRecord> {
        let round_score = if won {
            score(state.word_len(), state.wrong_count())
        } else {
            0
        };
        info!(word = state.word(), won, score = round_score, "round finished");

        let stats = self.store.update(stats, won, round_score as u64)?;

        show_round_end(&mut self.output, won, state.word(), state.wrong_count())?;
        if won {
            show_message(&mut self.output, &format!("Points earned: {round_score}"))?;
        }

        let report = RoundReport {
            state,
            won,
            score: round_score,
            stats: &stats,
        };
        if let Err(e) = self.logger.write(report) {
            warn!(error = %e, "failed to write round log");
            show_warning(&mut self.output, &format!("Error writing game log: {e}"))?;
        }

        Ok(stats)
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
