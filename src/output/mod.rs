//! Terminal output
//!
//! Colored code and clue rendering, plus printers for command results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
