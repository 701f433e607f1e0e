//! Formatting utilities for terminal output

use crate::core::{Feedback, GuessResult};
use colored::Colorize;

/// Format a guess as colored letter tiles
#[must_use]
pub fn colored_tiles(result: &GuessResult) -> String {
    result
        .guess()
        .chars()
        .zip(result.feedback())
        .map(|(ch, fb)| {
            let tile = format!(" {ch} ");
            match fb {
                Feedback::Correct => tile.black().on_green().bold().to_string(),
                Feedback::Misplaced => tile.black().on_yellow().bold().to_string(),
                Feedback::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Show an empty aggregate as a dash
#[must_use]
pub fn letters_or_dash(letters: &str) -> &str {
    if letters.is_empty() { "-" } else { letters }
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
