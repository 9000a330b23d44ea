//! Benchmark command
//!
//! Tests solver performance across multiple secrets.

use crate::core::Code;
use crate::game::{Game, GameConfig, Outcome};
use crate::solver::{Solver, Strategy};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Guesses used by one automated game, and whether it was solved
pub struct PlayedGame {
    pub guesses: Vec<Code>,
    pub solved: bool,
}

/// Let the solver play one full game against `secret`
pub fn play_secret<S: Strategy>(solver: &Solver<S>, secret: Code, config: GameConfig) -> PlayedGame {
    let mut game = Game::new(secret, config);
    let mut guesses = Vec::new();

    while let Some(guess) = solver.next_guess(game.history()) {
        guesses.push(guess);
        if !matches!(game.submit(guess), Ok(Outcome::Incorrect { .. })) {
            break;
        }
    }

    PlayedGame {
        guesses,
        solved: game.is_solved(),
    }
}

/// Draw `count` random secrets
pub fn random_secrets<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Code> {
    (0..count).map(|_| Code::random(rng)).collect()
}

/// Run benchmark on a set of secrets
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Code],
    config: GameConfig,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for &secret in secrets {
        let played = play_secret(solver, secret, config);
        let guesses = played.guesses.len();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        if played.solved {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            log::debug!("failed to break {} in {guesses} guesses", secret.abbrev());
        }
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();

    BenchmarkResult {
        total_codes,
        solved,
        failed: total_codes - solved,
        total_guesses,
        average_guesses: if total_codes == 0 {
            0.0
        } else {
            total_guesses as f64 / total_codes as f64
        },
        min_guesses: if total_codes == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
