//! # bookwell-session
//!
//! Session and token lifecycle management: claims decoding, the periodic
//! expiry watcher, the logout flow, and the route-guard decision helper.

pub mod guard;
pub mod jwt;
pub mod manager;
pub mod store;
mod watcher;

pub use guard::{RouteDecision, route_guard};
pub use jwt::decode_claims;
pub use manager::SessionManager;
pub use store::InMemorySessionStore;
