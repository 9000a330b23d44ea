//! Assisted codebreaking
//!
//! The human keeps the secret (or plays against someone else's) and the solver
//! suggests each guess from the clues entered so far.

use crate::console::{Console, InputError};
use crate::core::{Clue, Code};
use crate::game::Turn;
use crate::output::formatters::{clue_to_pegs, paint_code};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

enum Feedback {
    Clue(Clue),
    Quit,
    NewGame,
    Undo,
}

fn parse_feedback(input: &str) -> Result<Feedback, String> {
    match input.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Feedback::Quit),
        "new" | "n" => Ok(Feedback::NewGame),
        "undo" | "u" => Ok(Feedback::Undo),
        "win" | "correct" | "solved" => Ok(Feedback::Clue(Clue::SOLVED)),
        _ => input
            .parse::<Clue>()
            .map(Feedback::Clue)
            .map_err(|e| format!("{e}; use E/W/-, 'win', 'undo', 'new' or 'quit'")),
    }
}

/// Run the assisted codebreaking session
///
/// Ends on `quit` or when input closes.
///
/// # Errors
///
/// Returns an error if writing to the console fails
pub fn run_assist<R, W, S>(console: &mut Console<R, W>, solver: &Solver<S>) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: Strategy,
{
    match assist_session(console, solver) {
        Err(InputError::Closed) => Ok(()),
        other => Ok(other?),
    }
}

#[allow(clippy::too_many_lines)] // Interactive loop
fn assist_session<R, W, S>(
    console: &mut Console<R, W>,
    solver: &Solver<S>,
) -> Result<(), InputError>
where
    R: BufRead,
    W: Write,
    S: Strategy,
{
    console.say("\nI'll suggest a guess each turn. After you play it, enter the clue:")?;
    console.say("  E  right color in the right position")?;
    console.say("  W  right color in the wrong position")?;
    console.say("  -  color not in the code (or already accounted for)")?;
    console.say("Commands: 'win' when solved, 'undo', 'new', 'quit'\n")?;

    let mut history: Vec<Turn> = Vec::new();

    loop {
        let candidates = solver.candidates(&history);

        if candidates.is_empty() {
            console.say(
                "\n❌ No code fits those clues! One of them may be wrong."
                    .red()
                    .to_string(),
            )?;
            let command = console.prompt_until("Command (undo/new/quit)", |input| {
                match parse_feedback(input) {
                    Ok(Feedback::Clue(_)) | Err(_) => Err("enter undo, new or quit"),
                    Ok(other) => Ok(other),
                }
            })?;
            if !apply_command(console, &command, &mut history)? {
                return Ok(());
            }
            continue;
        }

        let Some(guess) = solver.next_guess(&history) else {
            console.say("The solver has no guess to offer.")?;
            return Ok(());
        };

        console.say("─".repeat(60))?;
        console.say(format_args!(
            "Turn {}: {} candidates remaining",
            history.len() + 1,
            candidates.len()
        ))?;
        console.say("─".repeat(60))?;

        let metrics = calculate_metrics(&guess, &candidates);
        console.say(format_args!(
            "\n📊 Suggested guess: {} ({})",
            paint_code(&guess),
            guess.abbrev()
        ))?;
        console.say(format_args!("   Entropy:          {:.3} bits", metrics.entropy))?;
        console.say(format_args!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        ))?;
        console.say(format_args!(
            "   Worst case:       {} candidates\n",
            metrics.max_partition
        ))?;

        if candidates.len() <= 10 {
            console.say("Remaining candidates:")?;
            for candidate in &candidates {
                console.say(format_args!("  • {candidate}"))?;
            }
            console.say("")?;
        }

        let feedback = console.prompt_until("Clue (E/W/-, 'win', or command)", parse_feedback)?;

        match feedback {
            Feedback::Clue(clue) => {
                history.push(Turn { guess, clue });
                if clue.is_solved() {
                    print_victory(console, &history)?;
                    if !console.confirm("Play again? (yes/no)")? {
                        console.say("\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                    history.clear();
                    console.say("\n🔄 New game started!\n")?;
                }
            }
            command => {
                if !apply_command(console, &command, &mut history)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Apply undo/new/quit; returns `false` on quit
fn apply_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    command: &Feedback,
    history: &mut Vec<Turn>,
) -> Result<bool, InputError> {
    match command {
        Feedback::Quit => {
            console.say("\n👋 Thanks for playing!\n")?;
            return Ok(false);
        }
        Feedback::NewGame => {
            history.clear();
            console.say("\n🔄 New game started!\n")?;
        }
        Feedback::Undo => {
            if history.pop().is_some() {
                console.say(format_args!("✓ Undone! Back to turn {}\n", history.len() + 1))?;
            } else {
                console.say("Nothing to undo!\n")?;
            }
        }
        Feedback::Clue(_) => {}
    }
    Ok(true)
}

fn print_victory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    history: &[Turn],
) -> Result<(), InputError> {
    let tries = history.len();
    console.say(format_args!("\n{}", "═".repeat(60).bright_cyan()))?;
    console.say(format_args!(
        "  Solution found in {} {}",
        tries.to_string().bright_cyan().bold(),
        if tries == 1 { "guess" } else { "guesses" }
    ))?;
    console.say("\n  Guess history:")?;
    for (i, turn) in history.iter().enumerate() {
        console.say(format_args!(
            "    {}. {} {} {}",
            i + 1,
            guess_label(&turn.guess),
            clue_to_pegs(turn.clue),
            turn.clue
        ))?;
    }
    console.say(format_args!("{}\n", "═".repeat(60).bright_cyan()))
}

fn guess_label(code: &Code) -> String {
    code.to_string().bright_white().bold().to_string()
}
