//! Terminal output formatting
//!
//! Display utilities for the game console and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_statistics, show_message, show_new_round, show_round_end, show_state, show_warning,
    show_welcome,
};
