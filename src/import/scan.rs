//! Scan import: an external extraction collaborator turns an image of a
//! hand-written day-sheet into structured rows. The collaborator is an
//! opaque black box behind the `Extractor` trait, so the normalizer can be
//! tested without it and the backend swapped freely.

use super::CandidateRow;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::process::Command;
use uuid::Uuid;

/// The strict row schema the collaborator must return. All five fields are
/// required; anything that fails to parse is rejected before it can reach
/// the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRow {
    pub date: String,
    pub task_name: String,
    pub total_earnings: f64,
    pub advance_amount: f64,
    pub ot_hours: f64,
}

/// Image bytes in, structured rows out.
///
/// Failure taxonomy matters to callers: `Extraction` means the call itself
/// failed (retry makes sense), `ExtractionEmpty` means the call worked but
/// the image was unreadable. Both leave prior state untouched.
pub trait Extractor {
    fn extract(&self, image: &[u8]) -> AppResult<Vec<ScanRow>>;
}

/// Default backend: spawn a user-configured command with the image path as
/// its final argument and parse its stdout as a JSON array of rows.
pub struct CommandExtractor {
    command: String,
}

impl CommandExtractor {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }
}

impl Extractor for CommandExtractor {
    fn extract(&self, image: &[u8]) -> AppResult<Vec<ScanRow>> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| AppError::Extraction("scan_command is empty".to_string()))?;

        // The collaborator gets a file path, not a pipe: most OCR tools
        // want to open the image themselves.
        let image_path = std::env::temp_dir().join(format!("wagebook_scan_{}.img", Uuid::new_v4()));
        fs::write(&image_path, image)?;

        let output = Command::new(program)
            .args(parts)
            .arg(&image_path)
            .output();

        fs::remove_file(&image_path).ok();

        let output =
            output.map_err(|e| AppError::Extraction(format!("cannot run '{program}': {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Extraction(format!(
                "'{program}' exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_rows(&output.stdout)
    }
}

/// Validate the collaborator's response against the schema. Malformed JSON,
/// missing fields and negative amounts are all rejected; an empty array is
/// the distinct "could not read" condition.
pub fn parse_rows(raw: &[u8]) -> AppResult<Vec<ScanRow>> {
    let rows: Vec<ScanRow> = serde_json::from_slice(raw)
        .map_err(|e| AppError::Extraction(format!("response failed schema validation: {e}")))?;

    if rows.is_empty() {
        return Err(AppError::ExtractionEmpty);
    }

    for row in &rows {
        if row.total_earnings < 0.0 || row.advance_amount < 0.0 || row.ot_hours < 0.0 {
            return Err(AppError::Extraction(format!(
                "response failed schema validation: negative amount in row dated {}",
                row.date
            )));
        }
    }

    Ok(rows)
}

/// Extracted rows arrive pre-structured; the only derivation left is the
/// attendance flag from amount evidence.
pub fn normalize(rows: Vec<ScanRow>) -> Vec<CandidateRow> {
    rows.into_iter()
        .map(|row| CandidateRow {
            is_present: row.total_earnings > 0.0,
            date: row.date,
            task_name: row.task_name,
            total_earnings: row.total_earnings,
            advance_amount: row.advance_amount,
            ot_hours: row.ot_hours,
        })
        .collect()
}
