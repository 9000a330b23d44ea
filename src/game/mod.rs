//! Game state and roles

mod role;
mod state;

pub use role::{Role, RoleError};
pub use state::{DEFAULT_MAX_GUESSES, Game, GameConfig, GameError, Outcome, Turn};
