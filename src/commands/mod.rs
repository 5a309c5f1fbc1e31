//! Command implementations

pub mod play;
pub mod stats;

pub use play::{DEFAULT_LOG_DIR, RoundEnd, Session, SessionConfig};
pub use stats::show_statistics;
