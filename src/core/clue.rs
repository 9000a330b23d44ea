//! Clue calculation and representation
//!
//! A clue reports, for every position of a guess, whether the color is exactly
//! right, present elsewhere in the secret, or absent.

use super::Code;
use super::code::CODE_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Right color in the right position
    Exact,
    /// Color is in the secret, but somewhere else
    WrongPosition,
    /// Color is not (or no longer) available in the secret
    WrongColor,
}

impl Mark {
    /// Single-character form used for display and parsing
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'E',
            Self::WrongPosition => 'W',
            Self::WrongColor => '-',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'E' | 'X' | '+' => Some(Self::Exact),
            'W' | 'O' | '?' => Some(Self::WrongPosition),
            '-' | '_' | '.' => Some(Self::WrongColor),
            _ => None,
        }
    }
}

/// Error type for unparseable clue strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClueError {
    #[error("a clue has exactly {CODE_LENGTH} marks, got {0}")]
    InvalidLength(usize),
    #[error("unknown mark '{0}' (use E for exact, W for wrong position, - for wrong color)")]
    UnknownMark(char),
}

/// Per-position feedback for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clue([Mark; CODE_LENGTH]);

impl Clue {
    /// Every position exact
    pub const SOLVED: Self = Self([Mark::Exact; CODE_LENGTH]);

    /// Create a clue from its marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; CODE_LENGTH]) -> Self {
        Self(marks)
    }

    /// The marks, in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; CODE_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Score `guess` against `secret`
    ///
    /// Duplicate colors are handled in two passes:
    /// 1. Mark exact matches and remove them from the pool of secret colors
    /// 2. Left to right, mark wrong-position for remaining guess colors that are
    ///    still in the pool, consuming one occurrence each
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Clue, Code};
    ///
    /// let secret: Code = "red red blue green".parse().unwrap();
    /// let guess: Code = "red blue red red".parse().unwrap();
    ///
    /// // The third red finds no unmatched red left in the secret
    /// assert_eq!(Clue::calculate(&guess, &secret).to_string(), "EWW-");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let mut marks = [Mark::WrongColor; CODE_LENGTH];
        let mut available = secret.color_counts();

        // First pass: exact matches
        for (i, (g, s)) in guess.colors().iter().zip(secret.colors()).enumerate() {
            if g == s {
                marks[i] = Mark::Exact;
                available[g.index()] -= 1;
            }
        }

        // Second pass: right color, wrong position
        for (mark, color) in marks.iter_mut().zip(guess.colors()) {
            if *mark == Mark::Exact {
                continue;
            }
            let count = &mut available[color.index()];
            if *count > 0 {
                *mark = Mark::WrongPosition;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Number of exact marks
    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Number of wrong-position marks
    #[must_use]
    pub fn wrong_position_count(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::WrongPosition).count()
    }
}

impl FromStr for Clue {
    type Err = ClueError;

    /// Parse a string like `"EW--"` (spaces ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        if symbols.len() != CODE_LENGTH {
            return Err(ClueError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::WrongColor; CODE_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(symbols) {
            *mark = Mark::from_symbol(ch).ok_or(ClueError::UnknownMark(ch))?;
        }

        Ok(Self(marks))
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Orange, Red, Violet, Yellow};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn clue(s: &str) -> Clue {
        s.parse().unwrap()
    }

    #[test]
    fn solved_constant() {
        assert!(Clue::SOLVED.is_solved());
        assert_eq!(Clue::SOLVED.exact_count(), 4);
        assert_eq!(Clue::SOLVED.wrong_position_count(), 0);
        assert_eq!(Clue::SOLVED.to_string(), "EEEE");
    }

    #[test]
    fn identical_codes_are_solved() {
        for s in ["royg", "rrrr", "bvbv", "gyor"] {
            let c = code(s);
            assert_eq!(Clue::calculate(&c, &c), Clue::SOLVED);
        }
    }

    #[test]
    fn no_shared_colors() {
        let result = Clue::calculate(&code("rrrr"), &code("bbgg"));
        assert_eq!(result, clue("----"));
        assert_eq!(result.exact_count(), 0);
        assert_eq!(result.wrong_position_count(), 0);
    }

    #[test]
    fn all_wrong_position() {
        let result = Clue::calculate(&code("royg"), &code("gyor"));
        assert_eq!(result, clue("WWWW"));
    }

    #[test]
    fn mixed_marks_stay_positional() {
        // secret: red orange yellow green
        // guess:  red yellow blue orange
        let result = Clue::calculate(&code("rybo"), &code("royg"));
        assert_eq!(result.marks(), &[
            Mark::Exact,
            Mark::WrongPosition,
            Mark::WrongColor,
            Mark::WrongPosition
        ]);
    }

    #[test]
    fn exact_match_consumes_before_wrong_position() {
        // The red in position 3 is exact; the red in position 0 finds nothing left
        let result = Clue::calculate(&code("rbgr"), &code("yyyr"));
        assert_eq!(result, clue("---E"));
    }

    #[test]
    fn duplicate_guess_colors_not_over_reported() {
        // Secret has one red; only the first unmatched red gets credit
        let result = Clue::calculate(&code("rrrb"), &code("yryy"));
        assert_eq!(result, clue("-E--"));

        let result = Clue::calculate(&code("rrbb"), &code("yyyr"));
        assert_eq!(result, clue("W---"));
    }

    #[test]
    fn duplicate_secret_colors() {
        // secret: red red blue green; guess: red blue red red
        let result = Clue::calculate(&code("rbrr"), &code("rrbg"));
        assert_eq!(result, clue("EWW-"));
    }

    #[test]
    fn marks_never_exceed_secret_counts() {
        let all = Code::all();
        for guess in all.iter().step_by(7) {
            for secret in all.iter().step_by(11) {
                let result = Clue::calculate(guess, secret);
                let secret_counts = secret.color_counts();
                let mut credited = [0u8; 6];
                for (mark, color) in result.marks().iter().zip(guess.colors()) {
                    if *mark != Mark::WrongColor {
                        credited[color.index()] += 1;
                    }
                }
                for i in 0..6 {
                    assert!(credited[i] <= secret_counts[i]);
                }
            }
        }
    }

    #[test]
    fn exact_count_matches_positional_equality() {
        let guess = Code::new([Red, Green, Violet, Orange]);
        let secret = Code::new([Red, Blue, Violet, Yellow]);
        assert_eq!(Clue::calculate(&guess, &secret).exact_count(), 2);
    }

    #[test]
    fn parse_alternate_symbols() {
        assert_eq!(clue("x?_+"), clue("EW-E"));
        assert_eq!(clue("E W - -"), clue("EW--"));
        assert_eq!(clue("eo.."), clue("EW--"));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!("EW-".parse::<Clue>(), Err(ClueError::InvalidLength(3)));
        assert_eq!("EW--E".parse::<Clue>(), Err(ClueError::InvalidLength(5)));
        assert_eq!("EWZ-".parse::<Clue>(), Err(ClueError::UnknownMark('Z')));
    }
}
