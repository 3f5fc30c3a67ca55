use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse --range into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above on both sides of a `:` (same format each side)
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(bad("start and end must have the same format"));
        }

        let (d1, _) = parse_period(start)?;
        let (_, d2) = parse_period(end)?;
        Ok((d1, d2))
    } else {
        parse_period(r.trim())
    }
}

/// A single period expression expands to its first and last day.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| bad("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p[0..4].parse().map_err(|_| bad("invalid year"))?;
            let m: u32 = p[5..7].parse().map_err(|_| bad("invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| bad("invalid month"))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| bad("invalid month"))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| bad("invalid month"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(bad("unsupported --range format")),
    }
}

fn bad(msg: &str) -> AppError {
    AppError::Export(msg.to_string())
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
