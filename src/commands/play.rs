//! Console game
//!
//! The human picks a side. As codebreaker they guess a hidden random secret.
//! As codemaker they choose a secret and watch the automated breaker work on it.

use crate::console::{Console, InputError};
use crate::core::{Clue, Code};
use crate::game::{Game, GameConfig, Outcome, Role, Turn};
use crate::output::formatters::{clue_to_pegs, paint_code, tries_word};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Settings for a console session
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Fixed role; asked for before every game when `None`
    pub role: Option<Role>,
    /// As codemaker, keep the secret private and score each guess by hand
    pub hidden_secret: bool,
    pub game: GameConfig,
}

/// How a finished game went, from the human's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSummary {
    /// The breaker found the secret in this many tries
    Broken { tries: usize },
    /// The budget ran out
    Unbroken,
}

/// Run games until the player declines to continue or input closes
///
/// # Errors
///
/// Returns an error if writing to the console fails or the solver gets stuck
pub fn run_play<R, W, S, G>(
    console: &mut Console<R, W>,
    solver: &Solver<S>,
    rng: &mut G,
    config: PlayConfig,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: Strategy,
    G: Rng + ?Sized,
{
    match session(console, solver, rng, config) {
        Err(e) if matches!(e.downcast_ref::<InputError>(), Some(InputError::Closed)) => {
            log::debug!("input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

fn session<R, W, S, G>(
    console: &mut Console<R, W>,
    solver: &Solver<S>,
    rng: &mut G,
    config: PlayConfig,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: Strategy,
    G: Rng + ?Sized,
{
    console.say("Welcome to Mastermind!")?;

    loop {
        let role = match config.role {
            Some(role) => role,
            None => console.choose_role()?,
        };
        log::info!("human plays {role}");

        match role {
            Role::Codebreaker => {
                play_codebreaker(console, Game::random(rng, config.game))?;
            }
            Role::Codemaker if config.hidden_secret => {
                play_codemaker_hidden(console, solver, config.game)?;
            }
            Role::Codemaker => {
                play_codemaker(console, solver, config.game)?;
            }
        }

        if !console.confirm("Play again? (yes/no)")? {
            console.say("Thanks for playing!")?;
            return Ok(());
        }
    }
}

/// Human guesses against `game`'s secret
///
/// # Errors
///
/// Returns an error if input closes or the game was already over
pub fn play_codebreaker<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut game: Game,
) -> Result<GameSummary> {
    console.say(format_args!(
        "I picked a secret code of 4 colors. You have {} guesses.",
        game.guesses_remaining()
    ))?;

    loop {
        let guess = console.read_code("\nEnter your guess.")?;

        match game.submit(guess)? {
            Outcome::Solved { tries } => {
                console.say(
                    format!(
                        "You guessed correctly ({guess}) in {tries} {}",
                        tries_word(tries)
                    )
                    .green()
                    .bold(),
                )?;
                return Ok(GameSummary::Broken { tries });
            }
            Outcome::Incorrect { clue, remaining } => {
                console.say(format_args!(
                    "Your guess {guess} is incorrect. ({remaining} guesses remaining)"
                ))?;
                console.say(format_args!("Here's your clue: {} {clue}", clue_to_pegs(clue)))?;
            }
            Outcome::Lost { clue, secret } => {
                console.say(format_args!("Last clue: {} {clue}", clue_to_pegs(clue)))?;
                console.say(
                    format!(
                        "Game over. You ran out of guesses ({}).",
                        game.max_guesses()
                    )
                    .red()
                    .bold(),
                )?;
                console.say(format_args!("The code was {}", paint_code(&secret)))?;
                return Ok(GameSummary::Unbroken);
            }
        }
    }
}

/// Automated breaker plays against a secret the human enters
///
/// # Errors
///
/// Returns an error if input closes or the solver has no consistent guess left
pub fn play_codemaker<R, W, S>(
    console: &mut Console<R, W>,
    solver: &Solver<S>,
    config: GameConfig,
) -> Result<GameSummary>
where
    R: BufRead,
    W: Write,
    S: Strategy,
{
    let secret: Code = console.read_code("\nPick a secret code for me to break.")?;
    let mut game = Game::new(secret, config);
    console.say(format_args!(
        "Your secret is {}. I have {} guesses.",
        paint_code(&secret),
        game.max_guesses()
    ))?;

    loop {
        let guess = solver
            .next_guess(game.history())
            .ok_or_else(|| anyhow::anyhow!("no code is consistent with the clues so far"))?;
        let outcome = game.submit(guess)?;
        let clue = Clue::calculate(&guess, &secret);

        console.say(format_args!(
            "Guess {}: {} -> {} {clue}",
            game.tries(),
            paint_code(&guess),
            clue_to_pegs(clue)
        ))?;

        match outcome {
            Outcome::Solved { tries } => {
                console.say(format_args!(
                    "I cracked your code in {tries} {}!",
                    tries_word(tries)
                ))?;
                return Ok(GameSummary::Broken { tries });
            }
            Outcome::Lost { .. } => {
                console.say(format!(
                    "I ran out of guesses ({}). Your code stays unbroken.",
                    game.max_guesses()
                ))?;
                return Ok(GameSummary::Unbroken);
            }
            Outcome::Incorrect { .. } => {}
        }
    }
}

/// Automated breaker plays against a secret only the human knows
///
/// The human scores every guess. Contradictory clues end the game early.
///
/// # Errors
///
/// Returns an error if input closes
pub fn play_codemaker_hidden<R, W, S>(
    console: &mut Console<R, W>,
    solver: &Solver<S>,
    config: GameConfig,
) -> Result<GameSummary>
where
    R: BufRead,
    W: Write,
    S: Strategy,
{
    console.say(format_args!(
        "Think of a secret code and keep it to yourself. I have {} guesses.",
        config.max_guesses
    ))?;

    let mut history: Vec<Turn> = Vec::with_capacity(config.max_guesses);
    while history.len() < config.max_guesses {
        let Some(guess) = solver.next_guess(&history) else {
            console.say("No code fits your clues. One of them must be wrong.".red())?;
            return Ok(GameSummary::Unbroken);
        };

        console.say(format_args!(
            "Guess {}: {}",
            history.len() + 1,
            paint_code(&guess)
        ))?;
        let clue = console.read_clue(&guess)?;
        history.push(Turn { guess, clue });

        if clue.is_solved() {
            let tries = history.len();
            console.say(format_args!(
                "I cracked your code in {tries} {}!",
                tries_word(tries)
            ))?;
            return Ok(GameSummary::Broken { tries });
        }
    }

    console.say(format!(
        "I ran out of guesses ({}). Your code stays unbroken.",
        config.max_guesses
    ))?;
    Ok(GameSummary::Unbroken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CyclingStrategy, NarrowingStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(script: &str) -> TestConsole {
        colored::control::set_override(false);
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn codebreaker_wins() {
        let mut c = console("rrrr\nroyg\n");
        let game = Game::new(code("royg"), GameConfig::default());

        let summary = play_codebreaker(&mut c, game).unwrap();
        assert_eq!(summary, GameSummary::Broken { tries: 2 });

        let out = transcript(c);
        assert!(out.contains("Your guess red red red red is incorrect. (11 guesses remaining)"));
        assert!(out.contains("Here's your clue: ●··· E---"));
        assert!(out.contains("You guessed correctly (red orange yellow green) in 2 tries"));
    }

    #[test]
    fn codebreaker_single_try() {
        let mut c = console("vvvv\n");
        let game = Game::new(code("vvvv"), GameConfig::default());

        play_codebreaker(&mut c, game).unwrap();
        assert!(transcript(c).contains("in 1 try"));
    }

    #[test]
    fn codebreaker_loses() {
        let mut c = console("rrrr\noooo\n");
        let game = Game::new(code("bgvy"), GameConfig::new(2).unwrap());

        let summary = play_codebreaker(&mut c, game).unwrap();
        assert_eq!(summary, GameSummary::Unbroken);

        let out = transcript(c);
        assert!(out.contains("Game over. You ran out of guesses (2)."));
        assert!(out.contains("The code was blue green violet yellow"));
    }

    #[test]
    fn codebreaker_retries_bad_colors() {
        let mut c = console("pink\nr\no\ny\ng\n");
        let game = Game::new(code("royg"), GameConfig::default());

        assert_eq!(
            play_codebreaker(&mut c, game).unwrap(),
            GameSummary::Broken { tries: 1 }
        );
        assert!(transcript(c).contains("Invalid input! Try again... (unknown color 'pink')"));
    }

    #[test]
    fn codemaker_is_broken_by_solver() {
        let mut c = console("b g v y\n");
        let solver = Solver::new(CyclingStrategy);

        let summary = play_codemaker(&mut c, &solver, GameConfig::default()).unwrap();
        assert!(matches!(summary, GameSummary::Broken { tries } if tries <= 6));

        let out = transcript(c);
        assert!(out.contains("Guess 1: red orange yellow green"));
        assert!(out.contains("I cracked your code"));
    }

    #[test]
    fn codemaker_survives_small_budget() {
        let mut c = console("vvvv\n");
        let solver = Solver::new(NarrowingStrategy);

        let summary = play_codemaker(&mut c, &solver, GameConfig::new(1).unwrap()).unwrap();
        assert_eq!(summary, GameSummary::Unbroken);
        assert!(transcript(c).contains("Your code stays unbroken"));
    }

    #[test]
    fn hidden_codemaker_scores_by_hand() {
        // Narrowing opens with rrrr; scoring ---- leaves oooo first
        let mut c = console("----\nEE\nEEEE\n");
        let solver = Solver::new(NarrowingStrategy);

        let summary = play_codemaker_hidden(&mut c, &solver, GameConfig::default()).unwrap();
        assert_eq!(summary, GameSummary::Broken { tries: 2 });

        let out = transcript(c);
        assert!(out.contains("Guess 2: orange orange orange orange"));
        assert!(out.contains("Invalid input! Try again..."));
        assert!(out.contains("I cracked your code in 2 tries!"));
    }

    #[test]
    fn hidden_codemaker_detects_contradiction() {
        let mut c = console("W---\n");
        let solver = Solver::new(NarrowingStrategy);

        let summary = play_codemaker_hidden(&mut c, &solver, GameConfig::default()).unwrap();
        assert_eq!(summary, GameSummary::Unbroken);
        assert!(transcript(c).contains("No code fits your clues"));
    }

    #[test]
    fn hidden_codemaker_budget_runs_out() {
        let mut c = console("----\n");
        let solver = Solver::new(NarrowingStrategy);

        let summary = play_codemaker_hidden(&mut c, &solver, GameConfig::new(1).unwrap()).unwrap();
        assert_eq!(summary, GameSummary::Unbroken);
        assert!(transcript(c).contains("I ran out of guesses (1)."));
    }

    #[test]
    fn session_asks_role_and_replays() {
        let mut c = console("spectator\nmaker\nrrrr\nyes\ncodemaker\noooo\nno\n");
        let solver = Solver::new(NarrowingStrategy);
        let mut rng = StdRng::seed_from_u64(1);

        run_play(&mut c, &solver, &mut rng, PlayConfig::default()).unwrap();

        let out = transcript(c);
        assert!(out.contains("Invalid input! Try again..."));
        assert_eq!(out.matches("I cracked your code").count(), 2);
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn session_with_fixed_role_skips_prompt() {
        let mut c = console("rrrr\n");
        let solver = Solver::new(NarrowingStrategy);
        let mut rng = StdRng::seed_from_u64(1);
        let config = PlayConfig {
            role: Some(Role::Codemaker),
            ..PlayConfig::default()
        };

        // Input closes at the replay prompt
        run_play(&mut c, &solver, &mut rng, config).unwrap();

        let out = transcript(c);
        assert!(!out.contains("Choose a role"));
        assert!(out.contains("I cracked your code in 1 try!"));
    }

    #[test]
    fn session_closed_input_is_not_an_error() {
        let mut c = console("");
        let solver = Solver::new(NarrowingStrategy);
        let mut rng = StdRng::seed_from_u64(3);

        assert!(run_play(&mut c, &solver, &mut rng, PlayConfig::default()).is_ok());
    }

    #[test]
    fn seeded_codebreaker_session_is_reproducible() {
        let play = || {
            let mut c = console("rrrr\nno\n");
            let solver = Solver::new(NarrowingStrategy);
            let mut rng = StdRng::seed_from_u64(42);
            let config = PlayConfig {
                role: Some(Role::Codebreaker),
                hidden_secret: false,
                game: GameConfig::new(1).unwrap(),
            };
            run_play(&mut c, &solver, &mut rng, config).unwrap();
            transcript(c)
        };

        assert_eq!(play(), play());
    }
}
