//! TUI application state and logic

use crate::core::{CODE_LENGTH, Code, Color};
use crate::game::{Game, GameConfig, Outcome};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: Strategy> {
    pub solver: Solver<S>,
    pub game: Game,
    pub input: Vec<Color>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub hint: Option<Hint>,
    pub should_quit: bool,
    config: GameConfig,
    rng: StdRng,
}

/// Solver's view of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub candidates: usize,
    pub suggestion: Option<Code>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, tries: Option<usize>) {
        self.total_games += 1;
        if let Some(tries) = tries {
            self.games_won += 1;
            if self.guess_distribution.len() <= tries {
                self.guess_distribution.resize(tries + 1, 0);
            }
            self.guess_distribution[tries] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<S: Strategy> App<S> {
    #[must_use]
    pub fn new(solver: Solver<S>, config: GameConfig, mut rng: StdRng) -> Self {
        let game = Game::random(&mut rng, config);

        let mut app = Self {
            solver,
            game,
            input: Vec::with_capacity(CODE_LENGTH),
            messages: Vec::new(),
            stats: Statistics::default(),
            hint: None,
            should_quit: false,
            config,
            rng,
        };
        app.add_message(
            &format!(
                "I picked a secret code. You have {} guesses.",
                config.max_guesses
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type 1-6 or r/o/y/g/b/v to pick colors, Enter to guess.",
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('h') => self.toggle_hint(),
            KeyCode::Char(c) => {
                if let Some(color) = key_color(c) {
                    self.push_color(color);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn push_color(&mut self, color: Color) {
        if self.game.is_over() {
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        } else if self.input.len() < CODE_LENGTH {
            self.input.push(color);
        }
    }

    /// Submit the composed code as a guess
    pub fn submit(&mut self) {
        if self.game.is_over() {
            return;
        }

        let Ok(colors) = <[Color; CODE_LENGTH]>::try_from(self.input.as_slice()) else {
            self.add_message(
                &format!("A guess needs {CODE_LENGTH} colors."),
                MessageStyle::Error,
            );
            return;
        };
        let guess = Code::new(colors);
        self.input.clear();

        match self.game.submit(guess) {
            Ok(Outcome::Solved { tries }) => {
                self.stats.record(Some(tries));
                let plural = if tries == 1 { "try" } else { "tries" };
                self.add_message(
                    &format!("You guessed correctly in {tries} {plural}!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(Outcome::Incorrect { remaining, .. }) => {
                self.add_message(
                    &format!("{remaining} guesses remaining"),
                    MessageStyle::Info,
                );
            }
            Ok(Outcome::Lost { secret, .. }) => {
                self.stats.record(None);
                self.add_message(
                    &format!("Game over. The code was {secret}."),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }

        if self.hint.is_some() {
            self.refresh_hint();
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::random(&mut self.rng, self.config);
        self.input.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        if self.hint.is_some() {
            self.refresh_hint();
        }
    }

    pub fn toggle_hint(&mut self) {
        if self.hint.take().is_none() {
            self.refresh_hint();
        }
    }

    fn refresh_hint(&mut self) {
        let history = self.game.history();
        self.hint = Some(Hint {
            candidates: self.solver.count_candidates(history),
            suggestion: if self.game.is_over() {
                None
            } else {
                self.solver.next_guess(history)
            },
        });
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Color for a digit `1`-`6` or a color letter
fn key_color(c: char) -> Option<Color> {
    match c.to_digit(10) {
        Some(d @ 1..=6) => Color::ALL.get(d as usize - 1).copied(),
        Some(_) => None,
        None => Color::from_letter(c),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Strategy>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Strategy>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
