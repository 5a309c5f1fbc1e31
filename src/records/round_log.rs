//! Per-round transcripts
//!
//! Every finished round gets its own numbered directory (`game1`, `game2`, ...)
//! under the log directory, holding a plain-text `log.txt`.

use super::stats::StatisticsRecord;
use crate::core::GameState;
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of per-round directory names
pub const ROUND_DIR_PREFIX: &str = "game";

/// Name of the transcript file inside each round directory
pub const LOG_FILE_NAME: &str = "log.txt";

/// Everything needed to describe a finished round
#[derive(Debug, Clone, Copy)]
pub struct RoundReport<'a> {
    pub state: &'a GameState,
    pub won: bool,
    pub score: usize,
    /// Statistics after this round was recorded
    pub stats: &'a StatisticsRecord,
}

/// Plain-text rendering of a [`RoundReport`] at a fixed point in time
pub struct Transcript<'a> {
    report: RoundReport<'a>,
    written_at: DateTime<Local>,
}

impl<'a> Transcript<'a> {
    #[must_use]
    pub fn new(report: RoundReport<'a>, written_at: DateTime<Local>) -> Self {
        Self { report, written_at }
    }
}

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RoundReport {
            state,
            won,
            score,
            stats,
        } = self.report;
        let elapsed = (self.written_at - state.started_at()).num_seconds().max(0);

        writeln!(f, "Game Log")?;
        writeln!(f, "Date & Time: {}", self.written_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Word: {}", state.word())?;
        writeln!(f, "Word Length: {}", state.word_len())?;
        writeln!(f, "Result: {}", if won { "Win" } else { "Loss" })?;
        writeln!(f, "Wrong Guesses: {}", state.wrong_count())?;
        writeln!(f, "Score: {score}")?;
        writeln!(f, "Duration: {elapsed}s")?;
        writeln!(f)?;

        writeln!(f, "--- Guesses (in order) ---")?;
        for (i, record) in state.history().iter().enumerate() {
            writeln!(f, "{}. {} → {}", i + 1, record.input, record.label)?;
        }

        let wrong: Vec<&str> = state
            .history()
            .iter()
            .filter(|r| r.is_wrong())
            .map(|r| r.input.as_str())
            .collect();
        let wrong = if wrong.is_empty() {
            "None".to_string()
        } else {
            wrong.join(", ")
        };
        writeln!(f)?;
        writeln!(f, "Wrong Letters: {wrong}")?;
        writeln!(f, "Remaining Attempts: {}", state.remaining_attempts())?;

        writeln!(f)?;
        writeln!(f, "--- Cumulative Player Statistics ---")?;
        writeln!(f, "Games Played: {}", stats.games_played)?;
        writeln!(f, "Wins: {}", stats.wins)?;
        writeln!(f, "Losses: {}", stats.losses)?;
        writeln!(f, "Total Score: {}", stats.total_score)?;
        // Shortest round-trip form, always with a decimal point: 100.0, 66.67
        writeln!(f, "Win Rate: {:?}%", stats.win_rate)?;
        writeln!(f, "Average Score: {:?}", stats.average_score)?;
        writeln!(f)?;
        writeln!(f, "---------------------------------------")
    }
}

/// Writes round transcripts into numbered directories
#[derive(Debug, Clone)]
pub struct RoundLogger {
    base: PathBuf,
}

impl RoundLogger {
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Create the directory for the next round
    ///
    /// The number is one more than the count of existing round directories,
    /// skipping ahead past any name that is already taken.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log directory cannot be scanned or created.
    pub fn next_destination(&self) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.base)?;

        let mut existing = 0;
        for entry in fs::read_dir(&self.base)? {
            let entry = entry?;
            if entry.file_type()?.is_dir()
                && entry.file_name().to_string_lossy().starts_with(ROUND_DIR_PREFIX)
            {
                existing += 1;
            }
        }

        let mut number = existing + 1;
        let mut folder = self.base.join(format!("{ROUND_DIR_PREFIX}{number}"));
        while folder.exists() {
            number += 1;
            folder = self.base.join(format!("{ROUND_DIR_PREFIX}{number}"));
        }

        fs::create_dir(&folder)?;
        debug!(folder = %folder.display(), "created round log directory");
        Ok(folder)
    }

    /// Write the transcript of a finished round
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be written. Callers
    /// treat this as a warning; the round result stands either way.
    pub fn write(&self, report: RoundReport<'_>) -> io::Result<PathBuf> {
        let folder = self.next_destination()?;
        let path = folder.join(LOG_FILE_NAME);
        let transcript = Transcript::new(report, Local::now());

        fs::write(&path, transcript.to_string())?;
        info!(path = %path.display(), "round log written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn finished_round() -> (GameState, StatisticsRecord) {
        let mut state = GameState::new("cat", 6);
        for guess in ["x", "c", "c", "at"] {
            state.process_guess(guess);
        }
        let mut stats = StatisticsRecord::default();
        stats.record_round(true, 25);
        (state, stats)
    }

    #[test]
    fn transcript_layout() {
        let (state, stats) = finished_round();
        let report = RoundReport {
            state: &state,
            won: true,
            score: 25,
            stats: &stats,
        };
        let text = Transcript::new(report, state.started_at()).to_string();
        let timestamp = state.started_at().format("%Y-%m-%d %H:%M:%S");

        let expected = format!(
            "Game Log
Date & Time: {timestamp}
Word: cat
Word Length: 3
Result: Win
Wrong Guesses: 1
Score: 25
Duration: 0s

--- Guesses (in order) ---
1. x → Wrong
2. c → Correct
3. c → Repeated

Wrong Letters: x
Remaining Attempts: 5

--- Cumulative Player Statistics ---
Games Played: 1
Wins: 1
Losses: 0
Total Score: 25
Win Rate: 100.0%
Average Score: 25.0

---------------------------------------
"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn transcript_without_wrong_guesses() {
        let mut state = GameState::new("cat", 6);
        state.process_guess("cat");
        let stats = StatisticsRecord::default();
        let report = RoundReport {
            state: &state,
            won: true,
            score: 30,
            stats: &stats,
        };

        let text = Transcript::new(report, Local::now()).to_string();
        assert!(text.contains("Wrong Letters: None\n"));
        assert!(text.contains("1. cat → Correct (full word)\n"));
        assert!(text.contains("Win Rate: 0.0%\n"));
        assert!(text.contains("Average Score: 0.0\n"));
    }

    #[test]
    fn transcript_rates_keep_rounded_precision() {
        let state = GameState::new("cat", 6);
        let mut stats = StatisticsRecord::default();
        stats.record_round(true, 30);
        stats.record_round(true, 25);
        stats.record_round(false, 0);
        let report = RoundReport {
            state: &state,
            won: false,
            score: 0,
            stats: &stats,
        };

        let text = Transcript::new(report, Local::now()).to_string();
        assert!(text.contains("Win Rate: 66.67%\n"));
        assert!(text.contains("Average Score: 18.33\n"));
    }

    #[test]
    fn destinations_are_numbered_sequentially() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RoundLogger::new(dir.path().join("game_log"));

        let first = logger.next_destination().unwrap();
        let second = logger.next_destination().unwrap();
        assert_eq!(first, logger.base().join("game1"));
        assert_eq!(second, logger.base().join("game2"));
    }

    #[test]
    fn destinations_ignore_unrelated_entries() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RoundLogger::new(dir.path());
        fs::write(dir.path().join("stats.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("other")).unwrap();

        assert_eq!(logger.next_destination().unwrap(), dir.path().join("game1"));
    }

    #[test]
    fn destinations_never_collide() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RoundLogger::new(dir.path());
        // One directory exists but with a gap in numbering
        fs::create_dir(dir.path().join("game2")).unwrap();

        let next = logger.next_destination().unwrap();
        assert_eq!(next, dir.path().join("game3"));
    }

    #[test]
    fn write_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RoundLogger::new(dir.path().join("game_log"));
        let (state, stats) = finished_round();
        let report = RoundReport {
            state: &state,
            won: true,
            score: 25,
            stats: &stats,
        };

        let path = logger.write(report).unwrap();
        assert_eq!(path, logger.base().join("game1").join(LOG_FILE_NAME));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Game Log\n"));
        assert!(text.contains("Word: cat\n"));
    }

    #[test]
    fn write_fails_when_base_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("game_log");
        fs::write(&blocker, "not a directory").unwrap();
        let logger = RoundLogger::new(&blocker);
        let (state, stats) = finished_round();
        let report = RoundReport {
            state: &state,
            won: false,
            score: 0,
            stats: &stats,
        };

        assert!(logger.write(report).is_err());
    }
}
