//! Line-oriented console I/O
//!
//! Prompts, validation and retry loops over any `BufRead`/`Write` pair, so game
//! sessions run the same against a terminal or an in-memory script.

mod prompt;

pub use prompt::{Console, InputError};
