//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as served by the scheduling API.
///
/// Read-only from the client core's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub user_id: i64,
    /// Human-readable display name.
    pub name: String,
    /// Unique login name.
    pub username: String,
    /// The user's preferred IANA timezone identifier.
    pub timezone: String,
    /// Role name as reported by the API.
    pub role: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
