//! Import normalizers: turn external tabular/extracted data into candidate
//! rows that the user reviews and confirms before anything is persisted.

pub mod note;
pub mod scan;
pub mod tabular;

use crate::models::{DailyLog, Worker};
use uuid::Uuid;

/// A reviewed-but-not-yet-persisted row, the common shape both import
/// sources normalize into.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    pub date: String,
    pub task_name: String,
    pub total_earnings: f64,
    pub advance_amount: f64,
    pub ot_hours: f64,
    pub is_present: bool,
}

/// Convert confirmed candidates into ledger entries for `worker`: fresh id,
/// the worker's current hourly rate as the overtime snapshot, and the
/// source's earnings carried over as-is (imported sheets already hold the
/// day's total, so it is stored, not recomputed).
pub fn to_daily_logs(rows: &[CandidateRow], worker: &Worker, provenance: &str) -> Vec<DailyLog> {
    rows.iter()
        .map(|row| DailyLog {
            id: Uuid::new_v4().to_string(),
            worker_id: worker.id.clone(),
            date: row.date.clone(),
            task_name: row.task_name.clone(),
            is_present: row.is_present,
            ot_hours: row.ot_hours,
            ot_rate: worker.hourly_rate,
            advance_amount: row.advance_amount,
            note: provenance.to_string(),
            total_earnings: row.total_earnings,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_rows_snapshot_the_current_hourly_rate() {
        let worker = Worker::new("Ahmed", "mason", 300.0, 25.0);
        let rows = vec![CandidateRow {
            date: "2026-08-01".into(),
            task_name: "يومية عمل".into(),
            total_earnings: 150.0,
            advance_amount: 0.0,
            ot_hours: 6.0,
            is_present: true,
        }];

        let logs = to_daily_logs(&rows, &worker, "csv import");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].worker_id, worker.id);
        assert_eq!(logs[0].ot_rate, 25.0);
        assert_eq!(logs[0].total_earnings, 150.0);
        assert_eq!(logs[0].note, "csv import");
        assert!(!logs[0].id.is_empty());
    }
}
