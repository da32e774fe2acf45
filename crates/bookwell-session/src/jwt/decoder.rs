//! Unverified JWT payload decoding.
//!
//! The client core only reads the claims embedded in the access token;
//! signature verification is the issuing API's responsibility. Any token
//! whose payload cannot be decoded is treated as expired by the caller.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use bookwell_core::{AppError, AppResult};
use bookwell_entity::session::TokenClaims;

/// Decode the claims payload from an access token string.
///
/// Accepts the standard three-part `header.payload.signature` form and
/// reads only the payload segment. Returns a token-decode error for a
/// malformed token or a payload missing a required claim.
pub fn decode_claims(access_token: &str) -> AppResult<TokenClaims> {
    let mut segments = access_token.split('.');

    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) if !payload.is_empty() => payload,
        _ => {
            return Err(AppError::token_decode(
                "Access token is not a well-formed JWT",
            ));
        }
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|e| {
        AppError::with_source(
            bookwell_core::error::ErrorKind::TokenDecode,
            format!("Access token payload is not valid base64url: {e}"),
            e,
        )
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::with_source(
            bookwell_core::error::ErrorKind::TokenDecode,
            format!("Access token claims could not be parsed: {e}"),
            e,
        )
    })
}
