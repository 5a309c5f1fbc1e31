//! Diagnostic logging
//!
//! Trace output goes to stderr so it never mixes with the game console.

use tracing::{Level, trace};
use tracing_subscriber::{
    EnvFilter, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    format!("hangman={level}")
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    trace!("tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_filter(0), "hangman=WARN");
        assert_eq!(default_filter(1), "hangman=INFO");
        assert_eq!(default_filter(2), "hangman=DEBUG");
        assert_eq!(default_filter(9), "hangman=TRACE");
    }

    #[test]
    fn default_filters_parse() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(default_filter(verbosity)).is_ok());
        }
    }
}
