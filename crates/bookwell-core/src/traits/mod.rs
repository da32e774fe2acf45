//! Core traits defined in `bookwell-core` and implemented by other crates
//! or by the embedding application.

pub mod navigator;
pub mod session_store;

pub use navigator::Navigator;
pub use session_store::SessionStore;
