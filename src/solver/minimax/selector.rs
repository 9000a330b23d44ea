//! Minimax-based guess selection
//!
//! Always selects the code that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Ties prefer codes that are still candidates, then the earliest code in pool
/// order. Returns the winning code and its worst case, or `None` if the guess
/// pool is empty.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::minimax::select_best_guess;
///
/// let pool: Vec<Code> = vec!["rrrr".parse().unwrap(), "royg".parse().unwrap()];
/// let candidates: Vec<Code> = vec!["royb".parse().unwrap(), "rgyo".parse().unwrap()];
///
/// let (best, worst) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.abbrev(), "royg");
/// assert_eq!(worst, 1);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(order, guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            let not_candidate = !candidates.contains(guess);
            (max_remaining, not_candidate, order, *guess)
        })
        .min_by_key(|&(max_remaining, not_candidate, order, _)| (max_remaining, not_candidate, order))
        .map(|(max_remaining, _, _, guess)| (guess, max_remaining))
}
