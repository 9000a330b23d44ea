//! Full-screen codebreaker game

mod app;
mod rendering;

pub use app::{App, Hint, Message, MessageStyle, Statistics, run_tui};
