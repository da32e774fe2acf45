//! Appointment domain entities.

pub mod model;

pub use model::{Appointment, Reservation};
