//! Cumulative player statistics
//!
//! A flat JSON record that survives across sessions. It is rewritten in full
//! after every round that ends in a win or a loss.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Error type for statistics persistence
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to access statistics file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("statistics file {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode statistics: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Tally of every finished round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    pub games_played: u64,
    pub wins: u64,
    pub losses: u64,
    pub total_score: u64,
    pub win_rate: f64,
    pub average_score: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl StatisticsRecord {
    /// Fold one finished round into the tally
    ///
    /// Callers pass a score of 0 for losses.
    pub fn record_round(&mut self, won: bool, round_score: u64) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.total_score += round_score;

        let played = self.games_played as f64;
        self.win_rate = round2(self.wins as f64 / played * 100.0);
        self.average_score = round2(self.total_score as f64 / played);
    }
}

/// Loads and saves the statistics record at a fixed path
#[derive(Debug, Clone)]
pub struct StatisticsStore {
    path: PathBuf,
}

impl StatisticsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record
    ///
    /// A missing file yields a zeroed record.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Malformed`] if the file exists but is not a valid
    /// record, and [`StatsError::Io`] if it cannot be read.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<StatisticsRecord, StatsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no statistics file yet, starting fresh");
                return Ok(StatisticsRecord::default());
            }
            Err(source) => {
                return Err(StatsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| StatsError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the persisted record
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, record: &StatisticsRecord) -> Result<(), StatsError> {
        let io_err = |source| StatsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        record.serialize(&mut ser)?;

        fs::write(&self.path, buf).map_err(io_err)
    }

    /// Record a finished round and persist the result immediately
    ///
    /// # Errors
    ///
    /// See [`StatisticsStore::save`].
    pub fn update(
        &self,
        mut record: StatisticsRecord,
        won: bool,
        round_score: u64,
    ) -> Result<StatisticsRecord, StatsError> {
        record.record_round(won, round_score);
        self.save(&record)?;
        info!(
            games = record.games_played,
            wins = record.wins,
            win_rate = record.win_rate,
            "statistics updated"
        );
        Ok(record)
    }
}
