//! Code solving command
//!
//! Runs the automated breaker against a known secret and records the path.

use crate::core::{Clue, Code};
use crate::game::{Game, GameConfig, Outcome};
use crate::solver::entropy::calculate_entropy;
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: Code,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self {
            secret,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub clue: Clue,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific code using the given solver and strategy
///
/// # Errors
///
/// Returns an error if the solver runs out of consistent candidates, which
/// cannot happen when the secret is in the solver's pool.
pub fn solve_code<S: Strategy>(config: &SolveConfig, solver: &Solver<S>) -> Result<SolveResult> {
    let mut game = Game::new(config.secret, config.game);
    let mut guesses: Vec<GuessStep> = Vec::new();

    loop {
        let history = game.history();
        let candidates = solver.candidates(history);
        let candidates_before = candidates.len();

        let guess = solver
            .next_guess(history)
            .with_context(|| format!("no candidates remain after {} guesses", history.len()))?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let ent = calculate_entropy(&guess, &candidates);
            (Some(ent), Some(candidates_before as f64 / ent.exp2()))
        } else {
            (None, None)
        };

        let outcome = game.submit(guess)?;
        let clue = Clue::calculate(&guess, &config.secret);
        let candidates_after = solver.count_candidates(game.history());

        guesses.push(GuessStep {
            guess,
            clue,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });

        match outcome {
            Outcome::Solved { .. } => {
                return Ok(SolveResult {
                    success: true,
                    guesses,
                    secret: config.secret,
                });
            }
            Outcome::Lost { .. } => {
                return Ok(SolveResult {
                    success: false,
                    guesses,
                    secret: config.secret,
                });
            }
            Outcome::Incorrect { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, MinimaxStrategy, NarrowingStrategy};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let solver = Solver::new(MinimaxStrategy);
        let result = solve_code(&SolveConfig::new(code("bbyr")), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.secret, code("bbyr"));
        assert_eq!(result.guesses.first().unwrap().guess, code("royg"));
        assert_eq!(result.guesses.last().unwrap().guess, code("bbyr"));
        assert!(result.guesses.last().unwrap().clue.is_solved());
    }

    #[test]
    fn solve_records_history() {
        let solver = Solver::new(EntropyStrategy);
        let result = solve_code(&SolveConfig::new(code("ovov")), &solver).unwrap();

        assert_eq!(result.guesses[0].candidates_before, 1296);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let solver = Solver::new(NarrowingStrategy);
        let config = SolveConfig {
            secret: code("vvvv"),
            game: GameConfig::new(2).unwrap(),
        };

        let result = solve_code(&config, &solver).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 2);
    }

    #[test]
    fn solve_first_guess_hit() {
        let solver = Solver::new(NarrowingStrategy);
        let result = solve_code(&SolveConfig::new(code("rrrr")), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].candidates_after, 1);
    }

    #[test]
    fn solve_fails_when_secret_outside_pool() {
        let solver = Solver::with_pool(NarrowingStrategy, vec![code("rrrr"), code("oooo")]);
        assert!(solve_code(&SolveConfig::new(code("vvvv")), &solver).is_err());
    }
}
