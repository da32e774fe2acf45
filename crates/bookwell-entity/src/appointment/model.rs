//! Appointment read models.
//!
//! The core only reads these shapes; creating and updating appointments
//! is a network concern outside this workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A scheduled appointment as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub appointment_id: i64,
    /// The hosting user's identifier.
    pub host_id: i64,
    /// Appointment title.
    pub title: String,
    /// Start instant (UTC).
    pub start_time: DateTime<Utc>,
    /// End instant (UTC).
    pub end_time: DateTime<Utc>,
    /// When the appointment was created.
    pub created_at: DateTime<Utc>,
    /// Number of attendants.
    pub total_attendants: i64,
    /// Invitation this appointment was created from.
    pub invitation_id: i64,
    /// Status name as reported by the API.
    pub status: String,
    /// Free-form notes.
    pub notes: String,
    /// The hosting user.
    pub host: User,
    /// All attending users.
    pub attendants: Vec<User>,
}

/// A lightweight reservation row used in list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: i64,
    /// Reservation title.
    pub title: String,
    /// Appointment date as an ISO string.
    pub appointment_date: String,
    /// Duration label.
    pub duration: String,
    /// Participant display names.
    pub participants: Vec<String>,
}
