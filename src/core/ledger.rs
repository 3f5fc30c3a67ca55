//! State container owning the two collections. Every mutation goes through
//! here; command handlers load the store, mutate, then persist wholesale.

use crate::errors::{AppError, AppResult};
use crate::models::{AppState, DailyLog, Worker};

pub struct Ledger {
    state: AppState,
}

impl Ledger {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn workers(&self) -> &[Worker] {
        &self.state.workers
    }

    pub fn logs(&self) -> &[DailyLog] {
        &self.state.logs
    }

    pub fn worker(&self, id: &str) -> Option<&Worker> {
        self.state.workers.iter().find(|w| w.id == id)
    }

    pub fn require_worker(&self, id: &str) -> AppResult<&Worker> {
        self.worker(id)
            .ok_or_else(|| AppError::WorkerNotFound(id.to_string()))
    }

    pub fn add_worker(&mut self, worker: Worker) -> AppResult<()> {
        if self.worker(&worker.id).is_some() {
            return Err(AppError::DuplicateWorker(worker.id));
        }
        self.state.workers.push(worker);
        Ok(())
    }

    /// Delete a worker and cascade to its logs. The subset to remove is
    /// computed first and both removals applied together, so callers never
    /// observe a half-deleted state. Returns the number of logs removed.
    pub fn delete_worker(&mut self, id: &str) -> AppResult<usize> {
        if self.worker(id).is_none() {
            return Err(AppError::WorkerNotFound(id.to_string()));
        }

        let before = self.state.logs.len();
        self.state.workers.retain(|w| w.id != id);
        self.state.logs.retain(|l| l.worker_id != id);
        Ok(before - self.state.logs.len())
    }

    /// Bulk insert, newest first: the batch lands at the head of the
    /// ledger in its own order, ahead of existing entries.
    pub fn add_logs(&mut self, logs: Vec<DailyLog>) {
        let mut rest = std::mem::take(&mut self.state.logs);
        self.state.logs = logs;
        self.state.logs.append(&mut rest);
    }

    pub fn add_log(&mut self, log: DailyLog) {
        self.add_logs(vec![log]);
    }

    pub fn delete_log(&mut self, id: &str) -> AppResult<()> {
        let before = self.state.logs.len();
        self.state.logs.retain(|l| l.id != id);
        if self.state.logs.len() == before {
            return Err(AppError::LogNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Backup restore: replace both collections at once, all-or-nothing.
    pub fn replace_all(&mut self, state: AppState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with_two_workers() -> (Ledger, String, String) {
        let w1 = Worker::new("Ahmed", "mason", 300.0, 25.0);
        let w2 = Worker::new("Samir", "helper", 200.0, 15.0);
        let (id1, id2) = (w1.id.clone(), w2.id.clone());

        let mut led = Ledger::new(AppState::default());
        led.add_worker(w1).unwrap();
        led.add_worker(w2).unwrap();

        let w1 = led.worker(&id1).unwrap().clone();
        let w2 = led.worker(&id2).unwrap().clone();
        led.add_log(DailyLog::for_worker(&w1, "2026-08-01", "a", true, 0.0, None, 0.0, ""));
        led.add_log(DailyLog::for_worker(&w2, "2026-08-01", "b", true, 0.0, None, 0.0, ""));
        led.add_log(DailyLog::for_worker(&w1, "2026-08-02", "c", false, 0.0, None, 50.0, ""));

        (led, id1, id2)
    }

    #[test]
    fn delete_worker_cascades_exactly() {
        let (mut led, id1, id2) = ledger_with_two_workers();

        let removed = led.delete_worker(&id1).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(led.workers().len(), 1);
        assert_eq!(led.logs().len(), 1);
        assert!(led.logs().iter().all(|l| l.worker_id == id2));
    }

    #[test]
    fn delete_unknown_worker_is_an_error() {
        let (mut led, ..) = ledger_with_two_workers();
        assert!(matches!(
            led.delete_worker("nope"),
            Err(AppError::WorkerNotFound(_))
        ));
        // Nothing was touched.
        assert_eq!(led.workers().len(), 2);
        assert_eq!(led.logs().len(), 3);
    }

    #[test]
    fn duplicate_worker_id_is_rejected() {
        let w = Worker::new("Ahmed", "mason", 300.0, 25.0);
        let mut led = Ledger::new(AppState::default());
        led.add_worker(w.clone()).unwrap();
        assert!(matches!(
            led.add_worker(w),
            Err(AppError::DuplicateWorker(_))
        ));
    }

    #[test]
    fn bulk_insert_prepends_in_batch_order() {
        let (mut led, id1, _) = ledger_with_two_workers();
        let w = led.worker(&id1).unwrap().clone();

        let batch = vec![
            DailyLog::for_worker(&w, "2026-08-10", "x", true, 0.0, None, 0.0, ""),
            DailyLog::for_worker(&w, "2026-08-11", "y", true, 0.0, None, 0.0, ""),
        ];
        led.add_logs(batch);

        assert_eq!(led.logs().len(), 5);
        assert_eq!(led.logs()[0].date, "2026-08-10");
        assert_eq!(led.logs()[1].date, "2026-08-11");
    }

    #[test]
    fn delete_log_removes_only_that_entry() {
        let (mut led, ..) = ledger_with_two_workers();
        let target = led.logs()[1].id.clone();
        led.delete_log(&target).unwrap();
        assert_eq!(led.logs().len(), 2);
        assert!(led.logs().iter().all(|l| l.id != target));
        assert!(matches!(
            led.delete_log(&target),
            Err(AppError::LogNotFound(_))
        ));
    }
}
