//! Claims payload embedded in every access token.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Claims decoded from the access token payload.
///
/// The core reads these without verifying the token signature; the
/// issuing API is the authority on validity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Server-side session identifier.
    pub session_id: i64,
    /// The user the token was issued for, when embedded.
    #[serde(default)]
    pub user: Option<User>,
}

impl TokenClaims {
    /// Expiration instant in milliseconds since epoch.
    pub fn expires_at_ms(&self) -> i64 {
        self.exp * 1000
    }

    /// Whether the validity window has elapsed at `now_ms`.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms()
    }
}
