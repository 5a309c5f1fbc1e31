//! Statistics command
//!
//! Prints the persisted cumulative statistics without starting a game.

use super::play::SessionConfig;
use crate::output::print_statistics;
use crate::records::{StatisticsRecord, StatisticsStore};
use anyhow::Result;
use std::io::Write;

/// Load the statistics for `config` and print them
///
/// # Errors
///
/// Returns an error if the statistics file is malformed or unreadable, or if
/// the output cannot be written.
pub fn show_statistics(config: &SessionConfig, out: &mut impl Write) -> Result<StatisticsRecord> {
    let stats = StatisticsStore::new(config.stats_path()).load()?;
    print_statistics(out, &stats)?;
    Ok(stats)
}
