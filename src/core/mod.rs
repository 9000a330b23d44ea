//! Core domain types for Mastermind
//!
//! Colors, codes and clues. Nothing here does I/O; every type is `Copy` and
//! cheap to compare, so solvers can score the whole code space freely.

mod clue;
mod code;
mod color;

pub use clue::{Clue, ClueError, Mark};
pub use code::{CODE_LENGTH, CODE_SPACE, Code, CodeError};
pub use color::{COLOR_COUNT, Color};
