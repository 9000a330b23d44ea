//! Worst-case partition size
//!
//! Given a guess and set of candidates, computes the most candidates that could
//! survive any single clue.

use crate::core::Code;
use crate::solver::entropy::group_by_clue;

/// Calculate the maximum remaining candidates for a guess
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::minimax::calculate_max_remaining;
///
/// let guess: Code = "royg".parse().unwrap();
/// let candidates: Vec<Code> = vec!["bbbb".parse().unwrap(), "vvvv".parse().unwrap()];
///
/// // Both candidates answer "----"
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    group_by_clue(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}
