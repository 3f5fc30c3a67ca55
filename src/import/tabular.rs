//! Tabular import: positional rows of cells (column order meaningful, no
//! reliable labels) become candidate ledger rows. Layout contract:
//! column 1 = date, column 2 = note, column 3 = amount received (earnings),
//! column 4 = amount paid out (advance).

use super::CandidateRow;
use super::note::{ImportRules, parse_note};
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Placeholders used when a data row has no note text.
pub const WORKDAY_PLACEHOLDER: &str = "يومية عمل";
pub const ADVANCE_PLACEHOLDER: &str = "سلفة مادية";

/// Read a CSV file into raw rows of cells, headers off: the sheets this
/// tool ingests have a title block instead of a header row, and rows vary
/// in width.
pub fn read_csv_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::NoValidRows(format!("cannot read {}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| AppError::NoValidRows(format!("malformed CSV row: {e}")))?;
        rows.push(record.iter().map(|c| c.trim().to_string()).collect());
    }
    Ok(rows)
}

/// Normalize raw rows into candidates. Skips the fixed-size preamble and
/// rows whose first cell is empty or equals a known label placeholder.
/// Non-numeric amount cells default to zero; a row is never failed.
pub fn normalize_rows(rows: &[Vec<String>], rules: &ImportRules) -> AppResult<Vec<CandidateRow>> {
    let mut out = Vec::new();

    for row in rows.iter().skip(rules.header_rows) {
        let date = cell(row, 0);
        if date.is_empty() || rules.skip_labels.iter().any(|l| l == &date) {
            continue;
        }

        let note = cell(row, 1);
        let received = parse_amount(&cell(row, 2));
        let paid = parse_amount(&cell(row, 3));

        let signals = parse_note(&note, rules);

        let task_name = if !note.is_empty() {
            note
        } else if received > 0.0 {
            WORKDAY_PLACEHOLDER.to_string()
        } else {
            ADVANCE_PLACEHOLDER.to_string()
        };

        out.push(CandidateRow {
            date,
            task_name,
            total_earnings: received,
            advance_amount: paid,
            ot_hours: signals.ot_hours,
            // Amount evidence overrides an absent textual marker.
            is_present: signals.is_present || received > 0.0,
        });
    }

    if out.is_empty() {
        return Err(AppError::NoValidRows(
            "expected columns: 1=date, 2=note, 3=received, 4=paid".to_string(),
        ));
    }

    Ok(out)
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

fn parse_amount(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(0.0)
}
