//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// One letter tile coloured by its status
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// A guessed word as a row of coloured tiles
#[must_use]
pub fn colored_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| tile(letter, status).to_string())
        .collect()
}

/// Feedback colours only, letters hidden
#[must_use]
pub fn masked_row(feedback: &Feedback) -> String {
    feedback
        .statuses()
        .iter()
        .map(|&status| tile('?', status).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
