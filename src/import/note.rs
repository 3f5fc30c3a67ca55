//! Heuristic note parser. The day-sheets this tool imports carry free-text
//! Arabic notes like "يوميه + 6" (a workday plus 6 overtime hours); this
//! module turns that text into structured signals. The marker words and
//! number patterns are configuration data, not code, because they are
//! locale-specific.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use regex::Regex;

/// Compiled import heuristics, built once per import run.
pub struct ImportRules {
    pub header_rows: usize,
    pub present_markers: Vec<String>,
    pub skip_labels: Vec<String>,
    ot_patterns: Vec<Regex>,
}

impl ImportRules {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let mut ot_patterns = Vec::with_capacity(cfg.ot_patterns.len());
        for p in &cfg.ot_patterns {
            ot_patterns.push(Regex::new(p).map_err(|e| AppError::InvalidPattern(e.to_string()))?);
        }

        Ok(Self {
            header_rows: cfg.import_header_rows,
            present_markers: cfg.present_markers.clone(),
            skip_labels: cfg.skip_labels.clone(),
            ot_patterns,
        })
    }
}

/// What a note tells us on its own. Callers OR in amount evidence
/// (`received > 0`) on top of `is_present`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteSignals {
    pub is_present: bool,
    pub ot_hours: f64,
}

/// Best-effort: an ambiguous note degrades to zero overtime rather than
/// failing the import.
pub fn parse_note(note: &str, rules: &ImportRules) -> NoteSignals {
    let is_present = rules.present_markers.iter().any(|m| note.contains(m.as_str()));

    let mut ot_hours = 0.0;
    for pattern in &rules.ot_patterns {
        if let Some(caps) = pattern.captures(note)
            && let Some(m) = caps.get(1)
            && let Ok(v) = m.as_str().parse::<f64>()
        {
            ot_hours = v;
            break;
        }
    }

    NoteSignals {
        is_present,
        ot_hours,
    }
}
