use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::stats::StatRecord;

/// On-disk save file contents.
///
/// Field names are the wire format: `{"secret_number": .., "attempts": ..,
/// "stats": [..]}`. No schema version field; the whole file is overwritten
/// on save and read back in one piece on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub secret_number: Option<i64>,
    pub attempts: u32,
    pub stats: Vec<StatRecord>,
}

/// Write the save file, overwriting any existing one.
pub fn save_game<P: AsRef<Path>>(path: P, data: &SaveData) -> Result<()> {
    let json = serde_json::to_string(data)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = ?path.as_ref(), "game saved");
    Ok(())
}

/// Read the save file.
///
/// Returns `Ok(None)` when the file does not exist. A file that exists but
/// fails to parse is reported as [`Error::CorruptSave`] so the caller can
/// fall back to a fresh game instead of crashing.
pub fn load_game<P: AsRef<Path>>(path: P) -> Result<Option<SaveData>> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            let err = Error::from(e);
            if err.is_not_found() {
                return Ok(None);
            }
            return Err(err);
        }
    };

    match serde_json::from_str(&contents) {
        Ok(data) => {
            debug!(?path, "game loaded");
            Ok(Some(data))
        }
        Err(e) => Err(Error::CorruptSave {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}
