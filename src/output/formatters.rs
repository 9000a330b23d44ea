//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Clue, Code, Color, Mark};
use colored::{ColoredString, Colorize};

/// Peg symbol for a clue mark
#[must_use]
pub const fn mark_symbol(mark: Mark) -> char {
    match mark {
        Mark::Exact => '●',
        Mark::WrongPosition => '○',
        Mark::WrongColor => '·',
    }
}

/// Format a clue as peg symbols, in position order
#[must_use]
pub fn clue_to_pegs(clue: Clue) -> String {
    clue.marks().iter().map(|&m| mark_symbol(m)).collect()
}

/// Color name painted in its own color
#[must_use]
pub fn paint_color(color: Color) -> ColoredString {
    let name = color.name();
    match color {
        Color::Red => name.red(),
        Color::Orange => name.truecolor(255, 140, 0),
        Color::Yellow => name.yellow(),
        Color::Green => name.green(),
        Color::Blue => name.blue(),
        Color::Violet => name.magenta(),
    }
    .bold()
}

/// Code as painted color names
#[must_use]
pub fn paint_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| paint_color(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a single clue can reveal
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    // Three marks per position
    let max_entropy = (CODE_LENGTH as f64) * 3f64.log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// "try" or "tries"
#[must_use]
pub const fn tries_word(count: usize) -> &'static str {
    if count == 1 { "try" } else { "tries" }
}
