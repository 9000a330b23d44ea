//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible code and generates statistics.

use super::benchmark::play_secret;
use crate::core::Code;
use crate::game::GameConfig;
use crate::output::formatters::create_progress_bar;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_codes: Vec<(Code, usize)>,
    pub failed_codes: Vec<Code>,
}

/// Run solver on every code in its pool (or the first `limit` codes)
///
/// # Panics
///
/// Panics if the progress bar template is malformed, which is a constant here.
pub fn run_test_all<S: Strategy>(
    solver: &Solver<S>,
    limit: Option<usize>,
    config: GameConfig,
) -> TestAllStatistics {
    let pool = solver.guess_pool();
    let secrets = &pool[..limit.unwrap_or(pool.len()).min(pool.len())];

    println!("🎯 Testing {} codes...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(secrets.len());
    let mut guessed_so_far = 0;

    for (idx, &secret) in secrets.iter().enumerate() {
        let played = play_secret(solver, secret, config);
        guessed_so_far += played.guesses.len();

        results.push(CodeTestResult {
            secret,
            guesses: played.guesses,
            success: played.solved,
        });

        if idx % 50 == 0 {
            let avg = guessed_so_far as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

/// Aggregate per-secret results
#[must_use]
pub fn summarize(results: &[CodeTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let solved_lengths = || results.iter().filter(|r| r.success).map(|r| r.guesses.len());
    let solved = solved_lengths().count();
    let total_guesses: usize = solved_lengths().sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest_codes: Vec<(Code, usize)> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| (r.secret, r.guesses.len()))
        .collect();
    hardest_codes.sort_by_key(|&(code, n)| (std::cmp::Reverse(n), code));
    hardest_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved,
        failed: results.len() - solved,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved_lengths().max().unwrap_or(0),
        min_guesses: solved_lengths().min().unwrap_or(0),
        hardest_codes,
        failed_codes: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.secret)
            .collect(),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let percent = |n: usize| n as f64 / stats.total_codes.max(1) as f64 * 100.0;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", percent(stats.solved)).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", percent(stats.failed)).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / stats.total_codes.max(1) as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let share = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses:2} guesses: {} {count:5} ({share:5.1}%)",
            bar.green()
        );
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.hardest_codes.iter().take(5) {
            println!("  {} ({guesses} guesses)", code.to_string().yellow());
        }
    }

    if !stats.failed_codes.is_empty() {
        println!("\n❌ {}", "Unbroken Codes".red().bold());
        for code in stats.failed_codes.iter().take(10) {
            println!("  {}", code.to_string().red());
        }
    }
}
