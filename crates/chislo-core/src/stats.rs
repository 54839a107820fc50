use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Timestamp format used in stat records, matching the save file schema.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary of one completed round. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub date: String,
    pub number: i64,
    pub attempts: u32,
    pub success: bool,
    pub range: String,
}

impl StatRecord {
    /// Build a record for a round that just ended, stamped with the local time.
    pub fn now(config: &GameConfig, number: i64, attempts: u32, success: bool) -> Self {
        Self {
            date: Local::now().format(DATE_FORMAT).to_string(),
            number,
            attempts,
            success,
            range: config.range_label(),
        }
    }
}
