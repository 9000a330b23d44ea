//! Game bookkeeping
//!
//! Holds the secret, scores guesses and tracks the attempt budget.

use crate::core::{Clue, Code};
use rand::Rng;
use thiserror::Error;

/// Default attempt budget
pub const DEFAULT_MAX_GUESSES: usize = 12;

/// Errors raised by game operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game already ended, no new guesses are accepted")]
    AlreadyOver,
    #[error("the guess budget must be at least 1")]
    ZeroBudget,
}

/// Game-level settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl GameConfig {
    /// # Errors
    /// Returns `GameError::ZeroBudget` if `max_guesses` is zero
    pub const fn new(max_guesses: usize) -> Result<Self, GameError> {
        if max_guesses == 0 {
            return Err(GameError::ZeroBudget);
        }
        Ok(Self { max_guesses })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub clue: Clue,
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess matched the secret
    Solved { tries: usize },
    /// Wrong, and guesses remain
    Incorrect { clue: Clue, remaining: usize },
    /// Wrong, and the budget is spent
    Lost { clue: Clue, secret: Code },
}

/// A single game against a fixed secret
#[derive(Debug, Clone)]
pub struct Game {
    secret: Code,
    history: Vec<Turn>,
    max_guesses: usize,
    solved: bool,
}

impl Game {
    #[must_use]
    pub fn new(secret: Code, config: GameConfig) -> Self {
        log::info!("new game with a budget of {} guesses", config.max_guesses);
        Self {
            secret,
            history: Vec::with_capacity(config.max_guesses),
            max_guesses: config.max_guesses,
            solved: false,
        }
    }

    /// Start a game against a random secret
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: GameConfig) -> Self {
        Self::new(Code::random(rng), config)
    }

    /// Score a guess and record it
    ///
    /// # Errors
    /// Returns `GameError::AlreadyOver` if the game was already solved or lost
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{Game, GameConfig, Outcome};
    ///
    /// let secret = "royg".parse().unwrap();
    /// let mut game = Game::new(secret, GameConfig::default());
    ///
    /// let outcome = game.submit("rrrr".parse().unwrap()).unwrap();
    /// assert!(matches!(outcome, Outcome::Incorrect { remaining: 11, .. }));
    ///
    /// let outcome = game.submit(secret).unwrap();
    /// assert_eq!(outcome, Outcome::Solved { tries: 2 });
    /// ```
    pub fn submit(&mut self, guess: Code) -> Result<Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::AlreadyOver);
        }

        let clue = Clue::calculate(&guess, &self.secret);
        self.history.push(Turn { guess, clue });
        log::debug!("guess {} scored {clue}", guess.abbrev());

        if clue.is_solved() {
            self.solved = true;
            log::info!("solved in {} tries", self.tries());
            return Ok(Outcome::Solved { tries: self.tries() });
        }

        let remaining = self.guesses_remaining();
        if remaining == 0 {
            log::info!("budget exhausted after {} tries", self.tries());
            Ok(Outcome::Lost {
                clue,
                secret: self.secret,
            })
        } else {
            Ok(Outcome::Incorrect { clue, remaining })
        }
    }

    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Guesses submitted so far
    #[must_use]
    pub fn tries(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.tries())
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.solved || self.guesses_remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn config_rejects_zero_budget() {
        assert_eq!(GameConfig::new(0), Err(GameError::ZeroBudget));
        assert_eq!(GameConfig::new(3).unwrap().max_guesses, 3);
        assert_eq!(GameConfig::default().max_guesses, 12);
    }

    #[test]
    fn solve_on_first_try() {
        let mut game = Game::new(code("bbvv"), GameConfig::default());
        assert_eq!(
            game.submit(code("bbvv")).unwrap(),
            Outcome::Solved { tries: 1 }
        );
        assert!(game.is_over());
        assert!(game.is_solved());
        assert_eq!(game.guesses_remaining(), 11);
    }

    #[test]
    fn incorrect_guess_counts_down() {
        let mut game = Game::new(code("royg"), GameConfig::default());
        let outcome = game.submit(code("gyor")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Incorrect {
                clue: "WWWW".parse().unwrap(),
                remaining: 11
            }
        );
        assert_eq!(game.tries(), 1);
        assert_eq!(game.history()[0].guess, code("gyor"));
        assert!(!game.is_over());
    }

    #[test]
    fn budget_exhaustion_reveals_secret() {
        let config = GameConfig::new(2).unwrap();
        let mut game = Game::new(code("royg"), config);

        assert!(matches!(
            game.submit(code("rrrr")).unwrap(),
            Outcome::Incorrect { remaining: 1, .. }
        ));
        assert_eq!(
            game.submit(code("bbbb")).unwrap(),
            Outcome::Lost {
                clue: "----".parse().unwrap(),
                secret: code("royg")
            }
        );
        assert!(game.is_over());
        assert!(!game.is_solved());
    }

    #[test]
    fn solving_on_last_guess_is_a_win() {
        let mut game = Game::new(code("royg"), GameConfig::new(1).unwrap());
        assert_eq!(
            game.submit(code("royg")).unwrap(),
            Outcome::Solved { tries: 1 }
        );
    }

    #[test]
    fn no_guesses_after_game_over() {
        let mut game = Game::new(code("royg"), GameConfig::new(1).unwrap());
        game.submit(code("vvvv")).unwrap();
        assert_eq!(game.submit(code("royg")), Err(GameError::AlreadyOver));
        assert_eq!(game.tries(), 1);
    }

    #[test]
    fn random_game_uses_rng() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let game_a = Game::random(&mut a, GameConfig::default());
        let game_b = Game::random(&mut b, GameConfig::default());
        assert_eq!(game_a.secret(), game_b.secret());
    }
}
