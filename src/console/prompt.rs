use crate::core::{CODE_LENGTH, Clue, Code, Color};
use crate::game::Role;
use std::fmt::{self, Display};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use thiserror::Error;

/// Why a prompt could not produce a value
#[derive(Error, Debug)]
pub enum InputError {
    /// End of input reached before a valid answer
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Prompting console over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's standard streams
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output stream
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a full line
    ///
    /// # Errors
    /// Returns an error if writing fails
    pub fn say(&mut self, line: impl Display) -> Result<(), InputError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// # Errors
    /// Returns `InputError::Closed` at end of input
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt
            writeln!(self.output)?;
            return Err(InputError::Closed);
        }

        Ok(line.trim().to_string())
    }

    /// Repeat `prompt` until `parse` accepts the answer
    ///
    /// # Errors
    /// Returns `InputError::Closed` if input ends first
    pub fn prompt_until<T, E, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, InputError>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(reason) => self.reject(&reason)?,
            }
        }
    }

    fn reject(&mut self, reason: &dyn Display) -> Result<(), InputError> {
        log::debug!("rejected input: {reason}");
        self.say(format_args!("Invalid input! Try again... ({reason})"))
    }

    /// Ask which side the human plays
    ///
    /// # Errors
    /// Returns `InputError::Closed` if input ends first
    pub fn choose_role(&mut self) -> Result<Role, InputError> {
        let names: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
        let prompt = format!("Choose a role ({})", names.join(" / "));
        self.prompt_until(&prompt, str::parse::<Role>)
    }

    /// Read a code one position at a time
    ///
    /// `label` is printed once before the first position. A complete code typed
    /// at the first position is accepted as a whole.
    ///
    /// # Errors
    /// Returns `InputError::Closed` if input ends first
    pub fn read_code(&mut self, label: &str) -> Result<Code, InputError> {
        self.say(label)?;
        let mut colors: Vec<Color> = Vec::with_capacity(CODE_LENGTH);

        while colors.len() < CODE_LENGTH {
            self.say(format_args!("Possible colors: {}", PaletteHint))?;
            let position = colors.len() + 1;
            let line = self.read_line(&format!("Choose a color for position {position}"))?;

            if colors.is_empty()
                && let Ok(code) = line.parse::<Code>()
            {
                return Ok(code);
            }

            match line.parse::<Color>() {
                Ok(color) => colors.push(color),
                Err(reason) => self.reject(&reason)?,
            }
        }

        let mut code = [Color::Red; CODE_LENGTH];
        code.copy_from_slice(&colors);
        Ok(Code::new(code))
    }

    /// Ask the human codemaker to score `guess` against their hidden secret
    ///
    /// # Errors
    /// Returns `InputError::Closed` if input ends first
    pub fn read_clue(&mut self, guess: &Code) -> Result<Clue, InputError> {
        let prompt = format!("Clue for {guess} (E exact, W wrong position, - wrong color)");
        self.prompt_until(&prompt, str::parse::<Clue>)
    }

    /// Ask a yes/no question
    ///
    /// # Errors
    /// Returns `InputError::Closed` if input ends first
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, InputError> {
        self.prompt_until(prompt, |answer| {
            match answer.to_ascii_lowercase().as_str() {
                "yes" | "y" => Ok(true),
                "no" | "n" => Ok(false),
                _ => Err("answer yes or no"),
            }
        })
    }
}

/// Color names with their one-letter abbreviations
struct PaletteHint;

impl fmt::Display for PaletteHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in Color::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color} ({})", color.letter())?;
        }
        Ok(())
    }
}
