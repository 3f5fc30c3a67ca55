//! JSON document store: the whole ledger lives in one file under a fixed
//! key and is replaced wholesale on every save. No migrations; an
//! incompatible shape change requires a new key.

use crate::errors::{AppError, AppResult};
use crate::models::AppState;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed document key. The data file is `<key>.json`.
pub const STORAGE_KEY: &str = "wagebook_data_v1";

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. A missing file yields an empty state; a file
    /// that exists but fails to parse is an error, never silent data loss.
    pub fn load(&self) -> AppResult<AppState> {
        if !self.path.exists() {
            return Ok(AppState::default());
        }

        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Store(format!("{}: {}", self.path.display(), e)))
    }

    /// Persist the whole state. Writes to a sibling temp file first and
    /// renames over the target, so a failed save leaves the previous
    /// document intact.
    pub fn save(&self, state: &AppState) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
