//! Token value types issued by the scheduling API.

use serde::{Deserialize, Serialize};

/// The token pair returned on login.
///
/// Opaque to the core except for the claims payload embedded in
/// `access_token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    /// The raw access token (JWT).
    pub access_token: String,
    /// The raw refresh token.
    pub refresh_token: String,
}
