//! # bookwell
//!
//! Facade crate re-exporting the Bookwell client core: session/token
//! lifecycle management, timezone-aware business-hours evaluation, and
//! debounced schema-driven field validation.

pub use bookwell_core as core;
pub use bookwell_entity as entity;
pub use bookwell_forms as forms;
pub use bookwell_schedule as schedule;
pub use bookwell_session as session;
