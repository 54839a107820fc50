//! Save file persistence and stats formatting.
//!
//! The save file is a single JSON object holding the in-progress round and
//! the append-only stats log. Saves are whole-file overwrites on explicit
//! user request; loads happen at most once, at session start.

mod format;
mod save;

pub use format::{format_stat_row, format_stats, outcome_label};
pub use save::{SaveData, load_game, save_game};
