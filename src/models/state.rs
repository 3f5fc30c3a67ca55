use super::{DailyLog, Worker};
use serde::{Deserialize, Serialize};

/// The whole persisted document: two collections, replaced wholesale on
/// every save. Missing arrays deserialize as empty, matching the original
/// v1 document's tolerance for partial data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub logs: Vec<DailyLog>,
}
