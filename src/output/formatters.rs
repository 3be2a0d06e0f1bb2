//! Formatting utilities for terminal output

use crate::core::{Color, Pattern};
use colored::Colorize;

/// Render a guess as a row of colored tiles
///
/// Each letter gets a background matching its feedback color.
#[must_use]
pub fn tile_row(word: &str, pattern: Pattern) -> String {
    word.chars()
        .enumerate()
        .map(|(i, ch)| {
            let tile = format!(" {} ", ch.to_ascii_uppercase());
            let colored = match pattern.color_at(i) {
                Color::Green => tile.black().on_green(),
                Color::Yellow => tile.black().on_yellow(),
                Color::Gray => tile.white().on_bright_black(),
            };
            colored.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a pattern as an emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
