//! Code analysis command
//!
//! Measures how much a code reveals when played as the opening guess.

use crate::core::Code;
use crate::solver::entropy::{calculate_metrics, group_by_clue};

/// Result of analyzing a code
pub struct AnalysisResult {
    pub code: Code,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub distinct_clues: usize,
    pub total_candidates: usize,
}

/// Analyze a code as a guess against a set of candidates
#[must_use]
pub fn analyze_code(code: &Code, candidates: &[Code]) -> AnalysisResult {
    let metrics = calculate_metrics(code, candidates);

    AnalysisResult {
        code: *code,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        distinct_clues: group_by_clue(code, candidates).len(),
        total_candidates: candidates.len(),
    }
}
