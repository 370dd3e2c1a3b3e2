//! Key names for the persistent store.
//!
//! Daily entries (brief, check-in log) are keyed by the device-local calendar
//! day — a tracker day rolls over at local midnight, not UTC and not a
//! rolling 24h window.

use chrono::NaiveDate;

/// The user profile record.
pub const USER: &str = "titan_user";

/// The engine progress collection.
pub const ENGINES: &str = "titan_engines";

/// Prefix for per-day brief entries.
pub const BRIEF_PREFIX: &str = "titan_brief_";

/// Prefix for per-day check-in logs.
pub const LOG_PREFIX: &str = "titan_log_";

/// Key for the daily brief generated for `date`.
pub fn brief(date: NaiveDate) -> String {
    format!("{BRIEF_PREFIX}{}", date.format("%Y-%m-%d"))
}

/// Key for the evening check-in log for `date`.
pub fn log(date: NaiveDate) -> String {
    format!("{LOG_PREFIX}{}", date.format("%Y-%m-%d"))
}

/// Today's date on the device-local calendar.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
