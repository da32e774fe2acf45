//! Local-time display helpers.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// Format an instant as local wall-clock time, e.g. `"8:05 AM"`.
pub fn format_time_in_zone(instant: DateTime<Utc>, timezone: Tz) -> String {
    instant
        .with_timezone(&timezone)
        .format("%-I:%M %p")
        .to_string()
}

/// Format an instant as a short date line, e.g. `"Mon 10 Jun 2024"`.
pub fn format_date_short(instant: DateTime<Utc>) -> String {
    instant.format("%a %d %b %Y").to_string()
}

/// Shift an instant by a whole number of days (negative moves back).
pub fn add_days(instant: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    instant + Duration::days(days)
}
