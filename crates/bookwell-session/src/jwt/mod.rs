//! Access token claims decoding.

pub mod decoder;

pub use decoder::decode_claims;
