//! Display functions for command results

use super::formatters::{clue_to_pegs, create_progress_bar, entropy_bar, paint_code};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

const WIDTH: usize = 60;

fn banner(title: &str) {
    let rule = "═".repeat(WIDTH);
    println!("\n{}", rule.cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", rule.cyan());
}

fn section(title: &str) {
    println!("\n{}", title.bright_cyan().bold());
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, details: bool) {
    banner(&format!("SOLVING {}", result.secret.abbrev().to_uppercase()));
    println!("Secret: {}", paint_code(&result.secret));

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\n{:>2}. {}  {} {}",
            i + 1,
            paint_code(&step.guess),
            clue_to_pegs(step.clue),
            step.clue
        );

        if !details {
            continue;
        }

        println!(
            "    candidates {} -> {}",
            step.candidates_before, step.candidates_after
        );
        if let (Some(entropy), Some(expected)) = (step.entropy, step.expected_remaining) {
            println!("    expected   {entropy:.3} bits, {expected:.1} codes left");
        }
        if step.candidates_after > 0 && step.candidates_before > 1 {
            let ratio = step.candidates_before as f64 / step.candidates_after as f64;
            println!("    actual     {:.3} bits ({ratio:.1}x fewer)", ratio.log2());
        }
    }

    let tries = result.guesses.len();
    let verdict = if result.success {
        format!("Broken in {tries} guesses").green().bold()
    } else {
        format!("Still unbroken after {tries} guesses").red().bold()
    };
    println!("\n{verdict}");
}

/// Print the result of code analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    banner(&format!("OPENING {}", result.code.abbrev().to_uppercase()));
    println!("Code:        {}", paint_code(&result.code));
    println!("Secrets:     {}", result.total_candidates);

    section("Information");
    println!(
        "  [{}] {}",
        entropy_bar(result.entropy, 30).green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("  {:.1}x expected reduction", result.expected_reduction);

    section("Partition");
    println!("  {} distinct clues", result.distinct_clues);
    println!("  {:.1} codes left on average", result.expected_remaining);
    println!("  {} codes left at worst", result.max_partition);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS");

    section("Performance");
    println!("  Secrets:          {}", result.total_codes);
    println!(
        "  Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Range:            {} to {}",
        result.min_guesses.to_string().green(),
        result.max_guesses.to_string().yellow()
    );
    if result.failed > 0 {
        println!("  Unbroken:         {}", result.failed.to_string().red().bold());
    }
    println!(
        "  Time:             {:.2}s ({:.1} secrets/s)",
        result.duration.as_secs_f64(),
        result.codes_per_second
    );

    section("Distribution");
    let total = result.total_codes.max(1) as f64;
    for guess_count in 1..=result.max_guesses {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("  {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
