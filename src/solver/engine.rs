//! Automated codebreaker

use super::strategy::Strategy;
use crate::core::{Clue, Code};
use crate::game::Turn;

/// Automated codebreaker
///
/// Coordinates candidate filtering and delegates guess choice to a strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
    guess_pool: Vec<Code>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver over the full code space
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self::with_pool(strategy, Code::all())
    }

    /// Create a solver over a custom pool of codes
    ///
    /// The pool is both the set of codes the solver may guess and the set of
    /// possible secrets.
    #[must_use]
    pub fn with_pool(strategy: S, mut guess_pool: Vec<Code>) -> Self {
        guess_pool.sort_unstable();
        guess_pool.dedup();
        Self {
            strategy,
            guess_pool,
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub fn guess_pool(&self) -> &[Code] {
        &self.guess_pool
    }

    /// Get the best first guess for a new game
    ///
    /// Uses the strategy's fixed opening when it has one.
    pub fn first_guess(&self) -> Option<Code> {
        self.strategy.opening().or_else(|| {
            self.strategy
                .select_guess(&self.guess_pool, &self.guess_pool, &[])
        })
    }

    /// Get the next guess given previous turns
    ///
    /// Returns `None` if no candidate is consistent with the history, which
    /// means some clue was wrong.
    pub fn next_guess(&self, history: &[Turn]) -> Option<Code> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);
        log::debug!("{} candidates after {} turns", candidates.len(), history.len());

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self
                .strategy
                .select_guess(&self.guess_pool, &candidates, history),
        }
    }

    /// Filter the pool to codes consistent with the history
    ///
    /// A code survives when scoring every past guess against it reproduces the
    /// recorded clue. Pool order is preserved.
    fn filter_candidates(&self, history: &[Turn]) -> Vec<Code> {
        self.guess_pool
            .iter()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|turn| Clue::calculate(&turn.guess, candidate) == turn.clue)
            })
            .copied()
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[Turn]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn candidates(&self, history: &[Turn]) -> Vec<Code> {
        self.filter_candidates(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{
        CyclingStrategy, EntropyStrategy, MinimaxStrategy, NarrowingStrategy, StrategyType,
    };

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn play<S: Strategy>(solver: &Solver<S>, secret: Code, budget: usize) -> Option<usize> {
        let mut history = Vec::new();
        for tries in 1..=budget {
            let guess = solver.next_guess(&history)?;
            let clue = Clue::calculate(&guess, &secret);
            history.push(Turn { guess, clue });
            if clue.is_solved() {
                return Some(tries);
            }
        }
        None
    }

    #[test]
    fn first_guess_uses_opening() {
        let solver = Solver::new(MinimaxStrategy);
        assert_eq!(solver.first_guess(), Some(code("royg")));

        let solver = Solver::new(NarrowingStrategy);
        assert_eq!(solver.first_guess(), Some(code("rrrr")));
    }

    #[test]
    fn count_candidates_narrows() {
        let solver = Solver::new(NarrowingStrategy);
        assert_eq!(solver.count_candidates(&[]), 1296);

        let guess = code("royg");
        let history = [Turn {
            guess,
            clue: Clue::calculate(&guess, &code("bvbv")),
        }];
        // Only blue and violet remain possible in every position
        assert_eq!(solver.count_candidates(&history), 16);
    }

    #[test]
    fn candidates_always_contain_secret() {
        let solver = Solver::new(NarrowingStrategy);
        let secret = code("gvrr");
        let history: Vec<Turn> = ["royg", "bbvv", "rrgg"]
            .iter()
            .map(|g| {
                let guess = code(g);
                Turn {
                    guess,
                    clue: Clue::calculate(&guess, &secret),
                }
            })
            .collect();

        assert!(solver.candidates(&history).contains(&secret));
    }

    #[test]
    fn inconsistent_history_yields_no_guess() {
        let solver = Solver::new(NarrowingStrategy);
        let history = [
            Turn {
                guess: code("rrrr"),
                clue: Clue::SOLVED,
            },
            Turn {
                guess: code("oooo"),
                clue: Clue::SOLVED,
            },
        ];
        assert_eq!(solver.next_guess(&history), None);
    }

    #[test]
    fn single_candidate_is_guessed() {
        let solver = Solver::new(NarrowingStrategy);
        let history = [Turn {
            guess: code("rrrr"),
            clue: Clue::SOLVED,
        }];
        assert_eq!(solver.next_guess(&history), Some(code("rrrr")));
    }

    #[test]
    fn narrowing_solves_sampled_secrets() {
        let solver = Solver::new(NarrowingStrategy);
        for secret in Code::all().iter().step_by(37) {
            let tries = play(&solver, *secret, 12).expect("narrowing should solve");
            assert!(tries <= 12);
        }
    }

    #[test]
    fn cycling_solves_in_six() {
        let solver = Solver::new(CyclingStrategy);
        for secret in Code::all().iter().step_by(29) {
            assert!(play(&solver, *secret, 6).is_some());
        }
    }

    #[test]
    fn minimax_and_entropy_solve_quickly() {
        let minimax = Solver::new(MinimaxStrategy);
        let entropy = Solver::new(EntropyStrategy);
        for secret in ["vvvv", "rogb", "bbyr", "ovov"] {
            assert!(play(&minimax, code(secret), 6).is_some());
            assert!(play(&entropy, code(secret), 6).is_some());
        }
    }

    #[test]
    fn strategy_type_dispatches() {
        let solver = Solver::new(StrategyType::from_name("cycling", None).unwrap());
        assert_eq!(solver.first_guess(), Some(code("royg")));
        assert_eq!(solver.strategy().name(), "cycling");
    }

    #[test]
    fn custom_pool_is_sorted_and_deduplicated() {
        let solver = Solver::with_pool(
            NarrowingStrategy,
            vec![code("vvvv"), code("rrrr"), code("vvvv")],
        );
        assert_eq!(solver.guess_pool(), &[code("rrrr"), code("vvvv")]);
    }
}
