//! Formatting utilities for terminal output

use crate::core::{Mark, Outcome, Word};
use colored::{ColoredString, Colorize};

/// One letter tile, coloured like the game board
#[must_use]
pub fn letter_tile(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Green => tile.black().on_green().bold(),
        Mark::Yellow => tile.black().on_yellow().bold(),
        Mark::None => tile.white().on_bright_black(),
    }
}

/// A guess rendered as coloured tiles
#[must_use]
pub fn outcome_tiles(word: &Word, outcome: &Outcome) -> String {
    word.text()
        .chars()
        .zip(outcome.marks())
        .map(|(letter, &mark)| letter_tile(letter, mark).to_string())
        .collect()
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

/// Format a share as a percentage, guarding against an empty total
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
