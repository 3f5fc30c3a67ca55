//! Pure, read-only summaries over the (workers, logs) pair. Absent data
//! yields zero sums, never errors.

use crate::models::{DailyLog, Worker};
use chrono::{Duration, NaiveDate};
use std::cmp::Ordering;

/// Balance line for one worker, net = earned - advanced.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerSummary {
    pub id: String,
    pub name: String,
    pub role: String,
    pub earned: f64,
    pub advanced: f64,
    pub balance: f64,
}

/// Earnings/advances totals for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: String,
    pub earnings: f64,
    pub advances: f64,
}

pub fn total_earnings(logs: &[DailyLog]) -> f64 {
    logs.iter().map(|l| l.total_earnings).sum()
}

pub fn total_advances(logs: &[DailyLog]) -> f64 {
    logs.iter().map(|l| l.advance_amount).sum()
}

pub fn total_overtime_hours(logs: &[DailyLog]) -> f64 {
    logs.iter().map(|l| l.ot_hours).sum()
}

/// The canonical "still owed" figure. Every place that shows a balance
/// must compute it this way; there is no alternate rounding or fee logic.
pub fn net_balance(logs: &[DailyLog]) -> f64 {
    total_earnings(logs) - total_advances(logs)
}

/// One line per worker, sorted by balance descending. The sort is stable:
/// equal balances keep the workers' original order.
pub fn per_worker_summary(workers: &[Worker], logs: &[DailyLog]) -> Vec<WorkerSummary> {
    let mut out: Vec<WorkerSummary> = workers
        .iter()
        .map(|w| {
            let w_logs: Vec<&DailyLog> = logs.iter().filter(|l| l.worker_id == w.id).collect();
            let earned: f64 = w_logs.iter().map(|l| l.total_earnings).sum();
            let advanced: f64 = w_logs.iter().map(|l| l.advance_amount).sum();
            WorkerSummary {
                id: w.id.clone(),
                name: w.name.clone(),
                role: w.role.clone(),
                earned,
                advanced,
                balance: earned - advanced,
            }
        })
        .collect();

    // Vec::sort_by is stable.
    out.sort_by(|a, b| {
        b.balance
            .partial_cmp(&a.balance)
            .unwrap_or(Ordering::Equal)
    });
    out
}

/// Sum earnings/advances for logs whose `date` equals the given day string
/// exactly. Logs with any other date text simply don't match.
pub fn daily_bucket(logs: &[DailyLog], date: &str) -> DayBucket {
    let day: Vec<&DailyLog> = logs.iter().filter(|l| l.date == date).collect();
    DayBucket {
        date: date.to_string(),
        earnings: day.iter().map(|l| l.total_earnings).sum(),
        advances: day.iter().map(|l| l.advance_amount).sum(),
    }
}

/// Buckets for the most recent `n` calendar days ending at `today`,
/// oldest first, including days with zero logs.
pub fn trailing_days(logs: &[DailyLog], n: usize, today: NaiveDate) -> Vec<DayBucket> {
    (0..n)
        .rev()
        .map(|back| {
            let d = today - Duration::days(back as i64);
            daily_bucket(logs, &d.format("%Y-%m-%d").to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(name: &str) -> Worker {
        Worker::new(name, "mason", 100.0, 10.0)
    }

    fn log_for(w: &Worker, date: &str, present: bool, ot: f64, advance: f64) -> DailyLog {
        DailyLog::for_worker(w, date, "t", present, ot, None, advance, "")
    }

    #[test]
    fn empty_set_sums_to_zero() {
        assert_eq!(total_earnings(&[]), 0.0);
        assert_eq!(total_advances(&[]), 0.0);
        assert_eq!(total_overtime_hours(&[]), 0.0);
        assert_eq!(net_balance(&[]), 0.0);
    }

    #[test]
    fn net_balance_is_earnings_minus_advances() {
        let w = worker("A");
        let logs = vec![
            log_for(&w, "2026-08-01", true, 2.0, 30.0),  // 120 earned, 30 advance
            log_for(&w, "2026-08-02", false, 0.0, 50.0), // 0 earned, 50 advance
        ];
        assert_eq!(total_earnings(&logs), 120.0);
        assert_eq!(total_advances(&logs), 80.0);
        assert_eq!(net_balance(&logs), 40.0);
        assert_eq!(total_overtime_hours(&logs), 2.0);
    }

    #[test]
    fn per_worker_summary_sorts_by_balance_descending() {
        let w1 = worker("low");
        let w2 = worker("high");
        let workers = vec![w1.clone(), w2.clone()];
        let logs = vec![
            log_for(&w1, "2026-08-01", true, 0.0, 90.0), // balance 10
            log_for(&w2, "2026-08-01", true, 0.0, 0.0),  // balance 100
        ];

        let summary = per_worker_summary(&workers, &logs);
        assert_eq!(summary[0].name, "high");
        assert_eq!(summary[0].balance, 100.0);
        assert_eq!(summary[1].balance, 10.0);
    }

    #[test]
    fn equal_balances_keep_input_order() {
        let names = ["a", "b", "c", "d"];
        let workers: Vec<Worker> = names.iter().map(|n| worker(n)).collect();
        // No logs: everyone has balance 0.
        let summary = per_worker_summary(&workers, &[]);
        let got: Vec<&str> = summary.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(got, names);
    }

    #[test]
    fn worker_with_no_logs_has_zero_line() {
        let w = worker("idle");
        let summary = per_worker_summary(std::slice::from_ref(&w), &[]);
        assert_eq!(summary[0].earned, 0.0);
        assert_eq!(summary[0].balance, 0.0);
    }

    #[test]
    fn daily_bucket_matches_exact_date_string_only() {
        let w = worker("A");
        let logs = vec![
            log_for(&w, "2026-08-01", true, 0.0, 10.0),
            log_for(&w, "2026-08-01", true, 0.0, 0.0),
            log_for(&w, "01/08/2026", true, 0.0, 0.0), // different text, no match
        ];
        let bucket = daily_bucket(&logs, "2026-08-01");
        assert_eq!(bucket.earnings, 200.0);
        assert_eq!(bucket.advances, 10.0);
    }

    #[test]
    fn trailing_days_includes_empty_days_oldest_first() {
        let w = worker("A");
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let logs = vec![log_for(&w, "2026-08-09", true, 0.0, 0.0)];

        let buckets = trailing_days(&logs, 3, today);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].date, "2026-08-08");
        assert_eq!(buckets[0].earnings, 0.0);
        assert_eq!(buckets[1].date, "2026-08-09");
        assert_eq!(buckets[1].earnings, 100.0);
        assert_eq!(buckets[2].date, "2026-08-10");
    }
}
