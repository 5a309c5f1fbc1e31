//! Persistent records
//!
//! Cumulative statistics (`stats.json`) and per-round transcripts.

pub mod round_log;
pub mod stats;

pub use round_log::{RoundLogger, RoundReport, Transcript};
pub use stats::{StatisticsRecord, StatisticsStore, StatsError};
