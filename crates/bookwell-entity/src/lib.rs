//! # bookwell-entity
//!
//! Domain entity models for Bookwell. Every struct in this crate mirrors
//! a record the scheduling API serves or a client-side value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod appointment;
pub mod session;
pub mod user;
