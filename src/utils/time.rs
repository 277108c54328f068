//! Time utilities: elapsed-duration formatting and the wall clock.

use chrono::Utc;

/// Format milliseconds as `HH:MM:SS`.
///
/// Every field has at least two zero-padded digits; hours are never
/// truncated, so 100 hours reads `100:00:00`.
pub fn format_elapsed(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}
