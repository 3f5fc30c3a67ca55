use crate::models::{AppState, DailyLog};
use serde::Serialize;

/// Flat row model for export: the log entry plus the resolved worker name,
/// so the exported file is readable without the workers collection.
#[derive(Serialize, Clone, Debug)]
pub struct LogExport {
    pub id: String,
    pub date: String,
    pub worker: String,
    pub task_name: String,
    pub present: bool,
    pub ot_hours: f64,
    pub ot_rate: f64,
    pub advance_amount: f64,
    pub total_earnings: f64,
    pub note: String,
}

impl LogExport {
    /// Dangling worker references export as "(deleted)", same as the views.
    pub fn from_log(log: &DailyLog, state: &AppState) -> Self {
        let worker = state
            .workers
            .iter()
            .find(|w| w.id == log.worker_id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|| "(deleted)".to_string());

        Self {
            id: log.id.clone(),
            date: log.date.clone(),
            worker,
            task_name: log.task_name.clone(),
            present: log.is_present,
            ot_hours: log.ot_hours,
            ot_rate: log.ot_rate,
            advance_amount: log.advance_amount,
            total_earnings: log.total_earnings,
            note: log.note.clone(),
        }
    }
}
