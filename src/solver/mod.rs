//! Automated codebreakers
//!
//! Candidate filtering plus a family of guess selection strategies.

mod engine;
pub mod entropy;
pub mod minimax;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{
    BALANCED_OPENING, CyclingStrategy, EntropyStrategy, MinimaxStrategy, NarrowingStrategy,
    RandomStrategy, Strategy, StrategyType, UnknownStrategy,
};
