//! Display functions for the game console
//!
//! Every function writes to a caller-supplied sink so the session can run
//! against stdout or an in-memory buffer.

use super::formatters::{attempts_bar, format_guessed_letters};
use crate::core::GameState;
use crate::records::StatisticsRecord;
use colored::Colorize;
use std::io::{self, Write};

/// Print the session banner
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, "{}", "       WELCOME TO HANGMAN GAME!".bright_yellow().bold())?;
    writeln!(out, "{}\n", "═".repeat(40).cyan())
}

/// Announce a freshly picked word
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show_new_round(out: &mut impl Write, word_len: usize) -> io::Result<()> {
    writeln!(out, "New word selected! (Length: {word_len})\n")
}

/// Print the revealed word, guessed letters, and remaining attempts
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show_state(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    writeln!(out, "Word: {}", state.progress().bright_white().bold())?;
    writeln!(
        out,
        "Guessed letters: {}",
        format_guessed_letters(&state.guessed_letters_sorted())
    )?;

    let remaining = state.remaining_attempts();
    let bar = attempts_bar(remaining, state.max_wrong());
    let bar = if remaining * 2 > state.max_wrong() {
        bar.green()
    } else {
        bar.red()
    };
    writeln!(out, "Remaining attempts: {remaining} {bar}\n")
}

/// Print a plain message
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show_message(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
}

/// Print a highlighted warning
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show_warning(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "⚠️  {}", message.yellow())
}

/// Print the end-of-round banner
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show_round_end(
    out: &mut impl Write,
    won: bool,
    word: &str,
    wrong_guesses: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    if won {
        writeln!(out, "🎉 {} The word was: {}", "You win!".green().bold(), word.bright_yellow())?;
    } else {
        writeln!(out, "❌ {} The word was: {}", "You lose.".red().bold(), word.bright_yellow())?;
    }
    writeln!(out, "Wrong guesses: {wrong_guesses}")?;
    writeln!(out, "{}\n", "═".repeat(40).cyan())
}

/// Print the cumulative statistics table
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn print_statistics(out: &mut impl Write, stats: &StatisticsRecord) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {} ", "PLAYER STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;

    writeln!(out, "   Games played:   {}", stats.games_played)?;
    writeln!(out, "   Wins:           {}", stats.wins.to_string().green())?;
    writeln!(out, "   Losses:         {}", stats.losses.to_string().red())?;
    writeln!(out, "   Total score:    {}", stats.total_score)?;
    writeln!(
        out,
        "   Win rate:       {}",
        format!("{:.2}%", stats.win_rate).bright_yellow().bold()
    )?;
    writeln!(out, "   Average score:  {:.2}", stats.average_score)
}
