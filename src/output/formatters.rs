//! Formatting utilities for terminal output

/// Format guessed letters as `a, c, t`, or `None` when nothing was tried
#[must_use]
pub fn format_guessed_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "None".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar with one cell per allowed wrong guess, filled for the ones still left
#[must_use]
pub fn attempts_bar(remaining: usize, max_wrong: usize) -> String {
    create_progress_bar(remaining as f64, max_wrong as f64, max_wrong)
}
