//! # bookwell-schedule
//!
//! Timezone-aware business-hours evaluation and local-time display
//! helpers. Pure functions; no shared state with the rest of the core.

pub mod business_hours;
pub mod format;

pub use business_hours::{
    BUSINESS_WINDOW, BusinessWindow, is_within_business_hours, is_within_business_hours_in,
};
pub use format::{add_days, format_date_short, format_time_in_zone};
