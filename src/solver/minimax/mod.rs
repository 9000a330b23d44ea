//! Minimax guess selection
//!
//! Worst-case minimization: pick the guess whose largest clue group is smallest.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
