//! Pure entropy-based code selection
//!
//! Selects the code that maximizes Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Code;
use rayon::prelude::*;

/// Entropies closer than this are treated as equal
///
/// Codes that are color/position relabelings of each other have identical
/// partitions, but summing in a different order can move the last bits.
const ENTROPY_EPSILON: f64 = 1e-9;

/// Select best guess by maximizing entropy
///
/// Ties prefer codes that are still candidates, then the earliest code in pool
/// order. Returns the winning code and its entropy, or `None` if the guess pool
/// is empty.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::entropy::select_best_guess;
///
/// let pool: Vec<Code> = vec!["rrrr".parse().unwrap(), "royg".parse().unwrap()];
/// let candidates: Vec<Code> = ["royb", "royv", "rgyo", "bbbb"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.abbrev(), "royg");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, f64)> {
    let scored: Vec<(Code, f64, bool)> = guess_pool
        .par_iter()
        .map(|guess| {
            let entropy = calculate_entropy(guess, candidates);
            let is_candidate = candidates.contains(guess);
            (*guess, entropy, is_candidate)
        })
        .collect();

    let mut best: Option<(Code, f64, bool)> = None;
    for (code, entropy, is_candidate) in scored {
        let better = match best {
            None => true,
            Some((_, best_entropy, best_is_candidate)) => {
                if (entropy - best_entropy).abs() <= ENTROPY_EPSILON {
                    is_candidate && !best_is_candidate
                } else {
                    entropy > best_entropy
                }
            }
        };
        if better {
            log::trace!("entropy leader {} ({entropy:.4} bits)", code.abbrev());
            best = Some((code, entropy, is_candidate));
        }
    }

    best.map(|(code, entropy, _)| (code, entropy))
}
