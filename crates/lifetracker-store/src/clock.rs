//! Wall-clock capture and timestamp formatting for log entries.
//!
//! Entries carry their submission time as a preformatted string. The
//! format is fixed at `HH:mm:ss.SSS`: 24-hour, zero-padded, millisecond
//! precision, in the process's local time zone, with locale-independent
//! digit rendering.

use chrono::{DateTime, Local};

/// chrono format string producing `HH:mm:ss.SSS`.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Format a local wall-clock instant as `HH:mm:ss.SSS`.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Capture the current local time as an `HH:mm:ss.SSS` string.
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}
