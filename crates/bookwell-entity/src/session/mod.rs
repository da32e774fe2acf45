//! Session domain entities.

pub mod claims;
pub mod model;
pub mod token;

pub use claims::TokenClaims;
pub use model::{Session, SessionState};
pub use token::AuthToken;
