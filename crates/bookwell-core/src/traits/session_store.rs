//! Session persistence collaborator trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for the layer that carries the session record across
/// application restarts.
///
/// The core only requires two capabilities: hand back the last persisted
/// record on init, and observe every session mutation. The storage medium
/// is the implementor's concern.
#[async_trait]
pub trait SessionStore<S>: Send + Sync + std::fmt::Debug + 'static
where
    S: Send + Sync + 'static + serde::Serialize + serde::de::DeserializeOwned,
{
    /// Load the last persisted session record, if any.
    async fn load(&self) -> AppResult<Option<S>>;

    /// Persist the session record after a mutation.
    async fn save(&self, session: &S) -> AppResult<()>;
}
