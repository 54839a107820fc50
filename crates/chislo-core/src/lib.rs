//! # chislo-core
//!
//! Core library for the "Угадай число" console guessing game.
//!
//! This crate provides:
//! - Session state: secret number, attempt counter, stats log
//! - Guess parsing and evaluation with directional feedback
//! - Hint derivation (a clamped sub-interval around the secret)
//! - Save/load of the session to a single JSON file
//!
//! Console interaction is deliberately absent: every operation here takes
//! values and returns values (or typed errors), so the interactive driver
//! in `chislo-cli` can be tested against scripted input.

pub mod config;
pub mod error;
pub mod game;
pub mod stats;
pub mod storage;

pub use config::{DEFAULT_SAVE_FILE, GameConfig};
pub use error::{Error, Result};
pub use game::{
    Direction, EXIT_KEYWORD, GameSession, GuessInput, HINT_KEYWORD, Hint, InvalidGuess, Outcome,
    parse_guess,
};
pub use stats::StatRecord;
pub use storage::{SaveData, format_stats, save_game};
