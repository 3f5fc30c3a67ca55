use crate::errors::{AppError, AppResult};
use crate::models::AppState;
use crate::ui::messages::confirm;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Backup document: the persisted state plus an export timestamp. Both
/// arrays are required on restore; a file missing either one is rejected
/// outright, there is no partial merge.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub workers: Vec<crate::models::Worker>,
    pub logs: Vec<crate::models::DailyLog>,
    pub export_date: String,
}

impl BackupDocument {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            workers: state.workers.clone(),
            logs: state.logs.clone(),
            export_date: Utc::now().to_rfc3339(),
        }
    }

    pub fn into_state(self) -> AppState {
        AppState {
            workers: self.workers,
            logs: self.logs,
        }
    }
}

pub struct BackupLogic;

impl BackupLogic {
    /// Write a backup of `state` to `dest_file`, optionally zipped.
    /// Returns the final path (the `.zip` when compressing). `force`
    /// skips the overwrite prompt, for scripted runs with no stdin.
    pub fn export(state: &AppState, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite?",
                dest.display()
            ))
        {
            return Err(AppError::Other("Backup cancelled by user".to_string()));
        }

        let doc = BackupDocument::from_state(state);
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(dest, &json)?;

        if compress {
            let zipped = compress_backup(dest)?;
            if zipped != dest {
                fs::remove_file(dest)?;
            }
            return Ok(zipped);
        }

        Ok(dest.to_path_buf())
    }

    /// Read and validate a backup file (plain JSON, or the first entry of
    /// a `.zip` produced by `export`).
    pub fn read(file: &str) -> AppResult<BackupDocument> {
        let path = Path::new(file);
        if !path.exists() {
            return Err(AppError::InvalidBackup(format!(
                "file not found: {}",
                path.display()
            )));
        }

        let content = if path.extension().is_some_and(|e| e == "zip") {
            let f = fs::File::open(path)?;
            let mut archive = zip::ZipArchive::new(f)
                .map_err(|e| AppError::InvalidBackup(format!("unreadable zip: {e}")))?;
            let mut entry = archive
                .by_index(0)
                .map_err(|e| AppError::InvalidBackup(format!("empty zip: {e}")))?;
            let mut s = String::new();
            entry.read_to_string(&mut s)?;
            s
        } else {
            fs::read_to_string(path)?
        };

        // workers and logs are required fields of BackupDocument, so a
        // document missing either array fails to parse here.
        serde_json::from_str(&content)
            .map_err(|e| AppError::InvalidBackup(format!("{}: {}", path.display(), e)))
    }
}

fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.json".to_string());

    zip.start_file(name, options).map_err(std::io::Error::other)?;

    let mut f = fs::File::open(path)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyLog, Worker};

    fn tmp_file(name: &str) -> String {
        let mut p = std::env::temp_dir();
        p.push(format!("{name}_wagebook_backup.json"));
        std::fs::remove_file(&p).ok();
        p.to_string_lossy().to_string()
    }

    fn sample_state() -> AppState {
        let w = Worker::new("Ahmed", "mason", 300.0, 25.0);
        let log = DailyLog::for_worker(&w, "2026-08-01", "site", true, 2.0, None, 100.0, "n");
        AppState {
            workers: vec![w],
            logs: vec![log],
        }
    }

    #[test]
    fn round_trip_reproduces_state_ignoring_export_date() {
        let state = sample_state();
        let file = tmp_file("roundtrip");

        BackupLogic::export(&state, &file, false, false).unwrap();
        let doc = BackupLogic::read(&file).unwrap();

        assert_eq!(doc.into_state(), state);
    }

    #[test]
    fn force_overwrites_an_existing_file_without_prompting() {
        let state = sample_state();
        let file = tmp_file("force");
        std::fs::write(&file, "old contents").unwrap();

        BackupLogic::export(&state, &file, false, true).unwrap();
        let doc = BackupLogic::read(&file).unwrap();
        assert_eq!(doc.into_state(), state);
    }

    #[test]
    fn zipped_round_trip() {
        let state = sample_state();
        let file = tmp_file("zipped");

        let final_path = BackupLogic::export(&state, &file, true, false).unwrap();
        assert_eq!(final_path.extension().unwrap(), "zip");
        assert!(!Path::new(&file).exists());

        let doc = BackupLogic::read(&final_path.to_string_lossy()).unwrap();
        assert_eq!(doc.into_state(), state);
    }

    #[test]
    fn backup_missing_logs_array_is_rejected() {
        let file = tmp_file("missing_logs");
        std::fs::write(&file, r#"{"workers": [], "exportDate": "x"}"#).unwrap();
        assert!(matches!(
            BackupLogic::read(&file),
            Err(AppError::InvalidBackup(_))
        ));
    }

    #[test]
    fn backup_carries_export_date() {
        let doc = BackupDocument::from_state(&sample_state());
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"exportDate\""));
    }
}
