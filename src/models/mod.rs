pub mod daily_log;
pub mod state;
pub mod worker;

pub use daily_log::DailyLog;
pub use state::AppState;
pub use worker::Worker;
