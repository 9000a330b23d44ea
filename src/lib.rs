//! Mastermind
//!
//! The classic code-breaking game for the terminal: play either side against the
//! computer, or let one of several automated codebreakers work on a secret.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Clue, Code};
//!
//! let secret: Code = "red orange yellow green".parse().unwrap();
//! let guess: Code = "royv".parse().unwrap();
//!
//! let clue = Clue::calculate(&guess, &secret);
//! assert_eq!(clue.to_string(), "EEE-");
//! ```

// Colors, codes and clues
pub mod core;

// Game state and roles
pub mod game;

// Automated codebreakers
pub mod solver;

// Line-oriented prompting
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
