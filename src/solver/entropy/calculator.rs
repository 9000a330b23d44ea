//! Shannon entropy of clue partitions
//!
//! Scoring a guess against every remaining candidate splits the candidates into
//! groups sharing the same clue. The entropy of that split is the expected
//! information gained by the guess.

use crate::core::{Clue, Code};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest clue group (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing clue x.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::entropy::calculate_entropy;
///
/// let guess: Code = "royg".parse().unwrap();
/// let candidates: Vec<Code> = vec!["royg".parse().unwrap(), "bbbb".parse().unwrap()];
///
/// // Two candidates, two different clues: exactly one bit
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_clue(guess, candidates))
}

/// Count how many candidates produce each clue for `guess`
pub(crate) fn group_by_clue(guess: &Code, candidates: &[Code]) -> FxHashMap<Clue, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let clue = Clue::calculate(guess, candidate);
        *counts.entry(clue).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a clue distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one clue with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n clues
#[must_use]
pub fn shannon_entropy<S>(clue_counts: &std::collections::HashMap<Clue, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = clue_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    clue_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining and worst case in one pass
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_clue(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().max().copied().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn clue_n(n: usize) -> Clue {
        // Distinct clues for building distributions by hand
        let mut marks = [Mark::WrongColor; 4];
        for mark in marks.iter_mut().take(n) {
            *mark = Mark::Exact;
        }
        Clue::new(marks)
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let mut counts = FxHashMap::default();
        for n in 0..4 {
            counts.insert(clue_n(n), 1);
        }

        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(clue_n(0), 10);

        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_is_lower() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for n in 0..4 {
            uniform.insert(clue_n(n), 25);
            skewed.insert(clue_n(n), if n == 0 { 97 } else { 1 });
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Clue, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn all_same_clue_gives_zero_entropy() {
        // None of these share a color with the guess
        let guess = code("rrrr");
        let candidates = [code("bbbb"), code("gggg"), code("yyyy")];

        assert!(calculate_entropy(&guess, &candidates).abs() < 0.001);
    }

    #[test]
    fn empty_candidates() {
        let guess = code("royg");
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);

        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.max_partition, 0);
    }

    #[test]
    fn metrics_on_full_space_are_bounded() {
        let all = Code::all();
        let metrics = calculate_metrics(&code("rroo"), &all);

        assert!(metrics.entropy > 0.0);
        assert!(metrics.entropy <= (all.len() as f64).log2());
        assert!(metrics.expected_remaining <= all.len() as f64);
        // Knuth's opening leaves at most 256 codes
        assert_eq!(metrics.max_partition, 256);
    }

    #[test]
    fn group_by_clue_sums_to_candidate_count() {
        let all = Code::all();
        let groups = group_by_clue(&code("royg"), &all);
        assert_eq!(groups.values().sum::<usize>(), all.len());
    }
}
