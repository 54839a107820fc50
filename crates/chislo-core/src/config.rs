use std::path::{Path, PathBuf};

/// Default save file location, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "game_save.json";

/// Game configuration: guessing range, attempt limit and save location.
///
/// The original game hardcoded all of these; keeping them in one value
/// lets the session and the driver be constructed without ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub min_range: i64,
    pub max_range: i64,
    pub max_attempts: u32,
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_range: 1,
            max_range: 100,
            max_attempts: 10,
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
        }
    }
}

impl GameConfig {
    pub fn with_save_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            save_path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Range label stored in stat records, e.g. `"1-100"`.
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.min_range, self.max_range)
    }

    /// Check whether a number falls inside the configured range.
    pub fn contains(&self, number: i64) -> bool {
        (self.min_range..=self.max_range).contains(&number)
    }
}
