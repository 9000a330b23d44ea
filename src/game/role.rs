//! Player roles

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The side a human plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Picks the secret and the computer breaks it
    Codemaker,
    /// Guesses a random secret
    Codebreaker,
}

/// Error for unrecognised role names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role '{0}' (expected codemaker or codebreaker)")]
pub struct RoleError(pub String);

impl Role {
    /// Both roles, in prompt order
    pub const ALL: [Self; 2] = [Self::Codemaker, Self::Codebreaker];

    /// The role the other player takes
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Codemaker => Self::Codebreaker,
            Self::Codebreaker => Self::Codemaker,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Codemaker => "codemaker",
            Self::Codebreaker => "codebreaker",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "codemaker" | "maker" | "creator" => Ok(Self::Codemaker),
            "codebreaker" | "breaker" | "guesser" => Ok(Self::Codebreaker),
            _ => Err(RoleError(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
