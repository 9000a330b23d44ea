//! Secret codes and guesses
//!
//! A `Code` is a fixed-length row of colors. Both the codemaker's secret and the
//! codebreaker's guesses are codes.

use super::color::{COLOR_COUNT, Color};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of positions in a code
pub const CODE_LENGTH: usize = 4;

/// Size of the full code space (6^4)
pub const CODE_SPACE: usize = COLOR_COUNT.pow(CODE_LENGTH as u32);

/// Error type for invalid codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("a code has exactly {CODE_LENGTH} colors, got {0}")]
    InvalidLength(usize),
    #[error("code index {0} is out of range")]
    IndexOutOfRange(usize),
}

/// A row of [`CODE_LENGTH`] colors
///
/// Codes order lexicographically by color index, first position most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    /// Create a code from its colors
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// The colors of this code
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// The color at `position` (0-based)
    ///
    /// # Panics
    /// Panics if `position >= CODE_LENGTH`
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Enumerate every possible code in order
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CODE_SPACE, Code};
    ///
    /// let all = Code::all();
    /// assert_eq!(all.len(), CODE_SPACE);
    /// assert_eq!(all[0].to_string(), "red red red red");
    /// ```
    #[must_use]
    pub fn all() -> Vec<Self> {
        (0..CODE_SPACE).map(Self::from_index_unchecked).collect()
    }

    /// Draw a code with every position uniform over the colors
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| {
            Color::ALL[rng.random_range(0..COLOR_COUNT)]
        }))
    }

    /// Base-6 index of this code in [`Code::all`]
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, color| acc * COLOR_COUNT + color.index())
    }

    /// Code at a base-6 index
    ///
    /// # Errors
    /// Returns `CodeError::IndexOutOfRange` if `index >= CODE_SPACE`
    pub fn from_index(index: usize) -> Result<Self, CodeError> {
        if index >= CODE_SPACE {
            return Err(CodeError::IndexOutOfRange(index));
        }
        Ok(Self::from_index_unchecked(index))
    }

    fn from_index_unchecked(index: usize) -> Self {
        let mut colors = [Color::Red; CODE_LENGTH];
        let mut rest = index;
        for slot in colors.iter_mut().rev() {
            *slot = Color::ALL[rest % COLOR_COUNT];
            rest /= COLOR_COUNT;
        }
        Self(colors)
    }

    /// Occurrences of each color, indexed by [`Color::index`]
    #[must_use]
    pub fn color_counts(&self) -> [u8; COLOR_COUNT] {
        let mut counts = [0u8; COLOR_COUNT];
        for color in self.0 {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Compact form using one letter per position, e.g. `royg`
    #[must_use]
    pub fn abbrev(&self) -> String {
        self.0.iter().map(|c| c.letter()).collect()
    }
}

impl From<[Color; CODE_LENGTH]> for Code {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse `"red orange yellow green"`, `"r,o,y,g"` or `"royg"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let compact: Option<Vec<Color>> = match tokens.as_slice() {
            [single] if single.chars().count() == CODE_LENGTH => {
                single.chars().map(Color::from_letter).collect()
            }
            _ => None,
        };

        let colors: Vec<Color> = match compact {
            Some(colors) => colors,
            None => tokens
                .iter()
                .map(|t| t.parse())
                .collect::<Result<_, _>>()?,
        };

        let len = colors.len();
        colors
            .try_into()
            .map(Self)
            .map_err(|_| CodeError::InvalidLength(len))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Orange, Red, Violet, Yellow};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_space_size() {
        assert_eq!(CODE_SPACE, 1296);
        assert_eq!(Code::all().len(), 1296);
    }

    #[test]
    fn all_is_sorted_and_unique() {
        let all = Code::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, code) in Code::all().iter().enumerate() {
            assert_eq!(code.index(), i);
            assert_eq!(Code::from_index(i).unwrap(), *code);
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(
            Code::from_index(CODE_SPACE),
            Err(CodeError::IndexOutOfRange(1296))
        );
    }

    #[test]
    fn last_code_is_all_violet() {
        assert_eq!(
            Code::from_index(CODE_SPACE - 1).unwrap(),
            Code::new([Violet; 4])
        );
    }

    #[test]
    fn parse_names() {
        let code: Code = "red orange yellow green".parse().unwrap();
        assert_eq!(code, Code::new([Red, Orange, Yellow, Green]));
    }

    #[test]
    fn parse_commas_and_letters() {
        let code: Code = "b, v,R ,g".parse().unwrap();
        assert_eq!(code, Code::new([Blue, Violet, Red, Green]));
    }

    #[test]
    fn parse_compact() {
        let code: Code = "RRBV".parse().unwrap();
        assert_eq!(code, Code::new([Red, Red, Blue, Violet]));
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(
            "red orange".parse::<Code>(),
            Err(CodeError::InvalidLength(2))
        );
        assert_eq!(
            "r o y g b".parse::<Code>(),
            Err(CodeError::InvalidLength(5))
        );
        assert_eq!("".parse::<Code>(), Err(CodeError::InvalidLength(0)));
        // A lone four-letter color name is one color, not a compact code
        assert_eq!("blue".parse::<Code>(), Err(CodeError::InvalidLength(1)));
    }

    #[test]
    fn parse_unknown_color() {
        assert!(matches!(
            "red orange pink green".parse::<Code>(),
            Err(CodeError::UnknownColor(_))
        ));
        assert!(matches!(
            "rxyg".parse::<Code>(),
            Err(CodeError::UnknownColor(_))
        ));
    }

    #[test]
    fn display_and_abbrev() {
        let code = Code::new([Red, Orange, Yellow, Green]);
        assert_eq!(code.to_string(), "red orange yellow green");
        assert_eq!(code.abbrev(), "royg");
        assert_eq!(code.abbrev().parse::<Code>().unwrap(), code);
    }

    #[test]
    fn color_counts_with_duplicates() {
        let code = Code::new([Red, Red, Blue, Red]);
        let counts = code.color_counts();
        assert_eq!(counts[Red.index()], 3);
        assert_eq!(counts[Blue.index()], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 4);
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(Code::random(&mut a), Code::random(&mut b));
        }
    }
}
