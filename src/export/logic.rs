use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::LogExport;
use crate::export::range::parse_range;
use crate::models::AppState;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export of the ledger.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` pairs)
    pub fn export(
        state: &AppState,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = collect_rows(state, date_bounds);

        if rows.is_empty() {
            warning("No log entries found for the selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// Flatten the ledger, oldest date first. When bounds are given, entries
/// whose date string is not a parseable calendar date are left out (they
/// cannot be compared against the bounds).
fn collect_rows(state: &AppState, bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<LogExport> {
    let mut rows: Vec<(Option<NaiveDate>, LogExport)> = state
        .logs
        .iter()
        .filter_map(|log| {
            let parsed = parse_date(&log.date);
            match (bounds, parsed) {
                (Some((start, end)), Some(d)) if d < start || d > end => None,
                (Some(_), None) => None,
                _ => Some((parsed, LogExport::from_log(log, state))),
            }
        })
        .collect();

    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows.into_iter().map(|(_, r)| r).collect()
}
