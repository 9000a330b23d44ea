//! Entropy-based guess selection
//!
//! Shannon entropy of the clue partition a guess induces over the remaining
//! candidates. The basis of the `entropy` strategy and of the metrics shown to
//! players.

mod calculator;
mod selector;

pub(crate) use calculator::group_by_clue;
pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::select_best_guess;
