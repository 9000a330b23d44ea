//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Code, Color, Mark};
use crate::game::Turn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Opening for the partition-based strategies
///
/// Four distinct colors minimize the worst case (52 codes) and maximize the
/// entropy (5.73 bits) of the first clue over the full code space.
pub const BALANCED_OPENING: Code =
    Code::new([Color::Red, Color::Orange, Color::Yellow, Color::Green]);

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select the next guess
    ///
    /// `candidates` are the pool codes consistent with every turn in `history`.
    /// Returns `None` if the strategy has nothing to offer.
    fn select_guess(
        &self,
        guess_pool: &[Code],
        candidates: &[Code],
        history: &[Turn],
    ) -> Option<Code>;

    /// Fixed first guess, if the strategy has one
    fn opening(&self) -> Option<Code> {
        None
    }
}

/// Error for unrecognised strategy names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}' (expected one of: {names})", names = StrategyType::NAMES.join(", "))]
pub struct UnknownStrategy(pub String);

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// First consistent candidate (default)
    Narrowing(NarrowingStrategy),
    /// Fixed-offset color cycling
    Cycling(CyclingStrategy),
    /// Random consistent candidate
    Random(RandomStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(
        &self,
        guess_pool: &[Code],
        candidates: &[Code],
        history: &[Turn],
    ) -> Option<Code> {
        match self {
            Self::Narrowing(s) => s.select_guess(guess_pool, candidates, history),
            Self::Cycling(s) => s.select_guess(guess_pool, candidates, history),
            Self::Random(s) => s.select_guess(guess_pool, candidates, history),
            Self::Entropy(s) => s.select_guess(guess_pool, candidates, history),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates, history),
        }
    }

    fn opening(&self) -> Option<Code> {
        match self {
            Self::Narrowing(s) => s.opening(),
            Self::Cycling(s) => s.opening(),
            Self::Random(s) => s.opening(),
            Self::Entropy(s) => s.opening(),
            Self::Minimax(s) => s.opening(),
        }
    }
}

impl StrategyType {
    /// Accepted strategy names
    pub const NAMES: [&'static str; 5] = ["narrowing", "cycling", "random", "entropy", "minimax"];

    /// Create strategy from name, seeding the random strategy if `seed` is given
    ///
    /// # Errors
    /// Returns `UnknownStrategy` if the name is not one of [`StrategyType::NAMES`]
    pub fn from_name(name: &str, seed: Option<u64>) -> Result<Self, UnknownStrategy> {
        match name.trim().to_ascii_lowercase().as_str() {
            "narrowing" | "narrow" => Ok(Self::Narrowing(NarrowingStrategy)),
            "cycling" | "cycle" => Ok(Self::Cycling(CyclingStrategy)),
            "random" => Ok(Self::Random(
                seed.map_or_else(RandomStrategy::default, RandomStrategy::seeded),
            )),
            "entropy" => Ok(Self::Entropy(EntropyStrategy)),
            "minimax" => Ok(Self::Minimax(MinimaxStrategy)),
            _ => Err(UnknownStrategy(name.to_string())),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Narrowing(_) => "narrowing",
            Self::Cycling(_) => "cycling",
            Self::Random(_) => "random",
            Self::Entropy(_) => "entropy",
            Self::Minimax(_) => "minimax",
        }
    }
}

impl FromStr for StrategyType {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, None)
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Candidate-pool narrowing
///
/// Guesses the first code, in code order, that is consistent with every clue so
/// far. Each clue can only shrink the pool, and the guess itself is always
/// removed by a wrong answer, so the breaker always makes progress.
pub struct NarrowingStrategy;

impl Strategy for NarrowingStrategy {
    fn select_guess(
        &self,
        _guess_pool: &[Code],
        candidates: &[Code],
        _history: &[Turn],
    ) -> Option<Code> {
        candidates.first().copied()
    }
}

/// Fixed-offset color cycling
///
/// On turn `t`, position `i` is given color `(i + t) mod 6`. A position that
/// has already earned an exact mark keeps that color. Every position walks
/// through all six colors within six turns, so any secret falls in six guesses.
pub struct CyclingStrategy;

impl CyclingStrategy {
    /// The cycling guess for a given history
    #[must_use]
    pub fn guess_for(history: &[Turn]) -> Code {
        let turn = history.len();
        Code::new(std::array::from_fn(|position| {
            history
                .iter()
                .find(|t| t.clue.marks()[position] == Mark::Exact)
                .map_or_else(
                    || Color::from_index_wrapping(position + turn),
                    |t| t.guess.color_at(position),
                )
        }))
    }
}

impl Strategy for CyclingStrategy {
    fn select_guess(
        &self,
        _guess_pool: &[Code],
        _candidates: &[Code],
        history: &[Turn],
    ) -> Option<Code> {
        Some(Self::guess_for(history))
    }

    fn opening(&self) -> Option<Code> {
        Some(Self::guess_for(&[]))
    }
}

/// Random selection
///
/// Picks a uniformly random consistent candidate.
pub struct RandomStrategy {
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    /// Reproducible random strategy
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(
        &self,
        _guess_pool: &[Code],
        candidates: &[Code],
        _history: &[Turn],
    ) -> Option<Code> {
        use rand::prelude::IndexedRandom;

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        candidates.choose(&mut *rng).copied()
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the code with the highest Shannon entropy.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess(
        &self,
        guess_pool: &[Code],
        candidates: &[Code],
        _history: &[Turn],
    ) -> Option<Code> {
        super::entropy::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }

    fn opening(&self) -> Option<Code> {
        Some(BALANCED_OPENING)
    }
}

/// Pure minimax strategy
///
/// Always selects the code that minimizes worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(
        &self,
        guess_pool: &[Code],
        candidates: &[Code],
        _history: &[Turn],
    ) -> Option<Code> {
        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }

    fn opening(&self) -> Option<Code> {
        Some(BALANCED_OPENING)
    }
}
