use std::path::PathBuf;

use nvrd_core::HistoryRecord;
use nvrd_engine::{read_optional, AtomicFileWriter, PersistError};
use nvrd_logging::{nvrd_debug, nvrd_info, nvrd_warn};
use serde::{Deserialize, Serialize};

use super::paths::HISTORY_FILENAME;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct PersistedHistory {
    origin_url: String,
    last_url: String,
    cursor: usize,
}

/// Single-record store for the last reading position.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILENAME)
    }

    /// Saved position, or `None` when the file is missing, unreadable or
    /// does not name any page.
    pub fn load(&self) -> Option<HistoryRecord> {
        let path = self.path();
        let content = match read_optional(&path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                nvrd_debug!("No history at {:?}", path);
                return None;
            }
            Err(err) => {
                nvrd_warn!("Failed to read history from {:?}: {}", path, err);
                return None;
            }
        };

        let history: PersistedHistory = match serde_json::from_str(&content) {
            Ok(history) => history,
            Err(err) => {
                nvrd_warn!("Failed to parse history from {:?}: {}", path, err);
                return None;
            }
        };

        if history.origin_url.trim().is_empty() && history.last_url.trim().is_empty() {
            return None;
        }

        nvrd_info!("Loaded history from {:?}", path);
        Some(HistoryRecord {
            origin_url: history.origin_url,
            last_url: history.last_url,
            cursor: history.cursor,
        })
    }

    /// Replace the stored record.
    pub fn save(&self, record: &HistoryRecord) -> Result<PathBuf, PersistError> {
        let history = PersistedHistory {
            origin_url: record.origin_url.clone(),
            last_url: record.last_url.clone(),
            cursor: record.cursor,
        };
        let content = serde_json::to_string(&history)
            .map_err(|err| PersistError::Serialize(err.to_string()))?;
        AtomicFileWriter::new(self.dir.clone()).write(HISTORY_FILENAME, &content)
    }
}
