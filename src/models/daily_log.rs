use super::worker::Worker;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ledger entry for one worker on one date. Entries are append-only:
/// there is no edit operation, every correction is a new entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: String,
    /// Reference to a Worker. Dangling references are tolerated and
    /// rendered as "(deleted)", never treated as an error.
    pub worker_id: String,
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    pub task_name: String,
    pub is_present: bool,
    pub ot_hours: f64,
    /// Hourly rate snapshot taken at creation time, so the entry stays
    /// stable if the worker's rate later changes.
    pub ot_rate: f64,
    pub advance_amount: f64,
    pub note: String,
    /// Base pay (if present) plus ot_hours * ot_rate, computed once at
    /// creation and stored; never recomputed.
    pub total_earnings: f64,
}

impl DailyLog {
    /// Build a new entry for `worker`, computing `total_earnings` from the
    /// worker's current rates. `ot_rate` may be overridden; it defaults to
    /// the worker's current hourly rate.
    #[allow(clippy::too_many_arguments)]
    pub fn for_worker(
        worker: &Worker,
        date: &str,
        task_name: &str,
        is_present: bool,
        ot_hours: f64,
        ot_rate: Option<f64>,
        advance_amount: f64,
        note: &str,
    ) -> Self {
        let ot_rate = ot_rate.unwrap_or(worker.hourly_rate);
        let base = if is_present { worker.daily_rate } else { 0.0 };

        Self {
            id: Uuid::new_v4().to_string(),
            worker_id: worker.id.clone(),
            date: date.to_string(),
            task_name: task_name.to_string(),
            is_present,
            ot_hours,
            ot_rate,
            advance_amount,
            note: note.to_string(),
            total_earnings: base + ot_hours * ot_rate,
        }
    }
}
