//! Peg colors
//!
//! The six colors a code position can take, with full-name and one-letter parsing.

use super::CodeError;
use std::fmt;
use std::str::FromStr;

/// Number of distinct peg colors
pub const COLOR_COUNT: usize = 6;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
}

impl Color {
    /// All colors, in index order
    pub const ALL: [Self; COLOR_COUNT] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Violet,
    ];

    /// Position of this color in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at `index`, wrapping around past the last color
    #[inline]
    #[must_use]
    pub const fn from_index_wrapping(index: usize) -> Self {
        Self::ALL[index % COLOR_COUNT]
    }

    /// Lowercase full name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
        }
    }

    /// One-letter abbreviation
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Orange => 'o',
            Self::Yellow => 'y',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Violet => 'v',
        }
    }

    /// Look up a color by its abbreviation (case-insensitive)
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.letter() == letter)
    }
}

impl FromStr for Color {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();

        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && let Some(color) = Self::from_letter(ch)
        {
            return Ok(color);
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name() == token)
            .ok_or_else(|| CodeError::UnknownColor(s.trim().to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
