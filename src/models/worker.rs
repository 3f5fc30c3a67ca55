use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person being paid: daily rate for full attendance days, hourly rate
/// for overtime. Field names stay camelCase on the wire so backups remain
/// shape-compatible with the v1 data document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub role: String,
    pub daily_rate: f64,
    pub hourly_rate: f64,
    /// Creation timestamp, epoch milliseconds.
    pub created_at: i64,
}

impl Worker {
    pub fn new(name: &str, role: &str, daily_rate: f64, hourly_rate: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            role: role.to_string(),
            daily_rate,
            hourly_rate,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
