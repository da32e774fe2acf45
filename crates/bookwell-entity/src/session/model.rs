//! Client-side session record.

use serde::{Deserialize, Serialize};

use super::token::AuthToken;
use crate::user::User;

/// The in-memory record of current authentication status.
///
/// Exactly one `Session` exists per running application instance. It is
/// mutated only by the session lifecycle manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user, if any.
    pub user: Option<User>,
    /// The current token pair, if any.
    pub token: Option<AuthToken>,
    /// Whether the token's validity window has been confirmed elapsed.
    pub is_expired: bool,
}

/// Lifecycle state derived from the session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No token is held.
    Unauthenticated,
    /// A token is held and has not been confirmed expired.
    Active,
    /// The validity window has been confirmed elapsed.
    Expired,
}

impl Session {
    /// Derive the lifecycle state. A session without a token is never
    /// reported as `Active`.
    pub fn state(&self) -> SessionState {
        match (&self.token, self.is_expired) {
            (None, false) => SessionState::Unauthenticated,
            (_, true) => SessionState::Expired,
            (Some(_), false) => SessionState::Active,
        }
    }

    /// Whether a token is currently held.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}
