//! Business-hours containment checks.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use bookwell_core::{AppError, AppResult};

/// The fixed local-time window appointments must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessWindow {
    /// Window start hour (local).
    pub start_hour: u32,
    /// Window start minute (local).
    pub start_minute: u32,
    /// Window end hour (local).
    pub end_hour: u32,
    /// Window end minute (local).
    pub end_minute: u32,
}

/// Operating hours: 08:00–17:00 local, inclusive on both ends.
pub const BUSINESS_WINDOW: BusinessWindow = BusinessWindow {
    start_hour: 8,
    start_minute: 0,
    end_hour: 17,
    end_minute: 0,
};

impl BusinessWindow {
    /// Whether a local `(hour, minute)` falls inside the window,
    /// compared lexicographically and inclusive at both boundaries.
    pub fn contains(&self, hour: u32, minute: u32) -> bool {
        let after_start =
            hour > self.start_hour || (hour == self.start_hour && minute >= self.start_minute);
        let before_end = hour < self.end_hour || (hour == self.end_hour && minute <= self.end_minute);
        after_start && before_end
    }
}

/// Local wall-clock `(hour, minute)` of a UTC instant in `timezone`.
///
/// Calendar-aware: uses the zone's offset at that specific instant, so
/// daylight-saving transitions and non-whole-hour offsets resolve
/// correctly.
fn local_clock(instant: DateTime<Utc>, timezone: Tz) -> (u32, u32) {
    let local = instant.with_timezone(&timezone);
    (local.hour(), local.minute())
}

/// Whether both endpoints of an appointment fall inside business hours.
///
/// Each endpoint is converted to local wall-clock time in `timezone` and
/// checked against [`BUSINESS_WINDOW`] independently. Only the endpoints
/// are checked: an interval that leaves the window between two in-window
/// endpoints (e.g. spanning overnight) is not rejected. That matches the
/// product's validation rules as shipped.
pub fn is_within_business_hours(
    start_instant: DateTime<Utc>,
    end_instant: DateTime<Utc>,
    timezone: Tz,
) -> bool {
    let (start_hour, start_minute) = local_clock(start_instant, timezone);
    let (end_hour, end_minute) = local_clock(end_instant, timezone);

    BUSINESS_WINDOW.contains(start_hour, start_minute)
        && BUSINESS_WINDOW.contains(end_hour, end_minute)
}

/// As [`is_within_business_hours`], taking an IANA timezone identifier.
///
/// Returns a configuration error for an identifier the timezone database
/// does not know.
pub fn is_within_business_hours_in(
    start_instant: DateTime<Utc>,
    end_instant: DateTime<Utc>,
    timezone: &str,
) -> AppResult<bool> {
    let tz: Tz = timezone.parse().map_err(|_| {
        AppError::configuration(format!("Unknown IANA timezone identifier: {timezone}"))
    })?;
    Ok(is_within_business_hours(start_instant, end_instant, tz))
}
