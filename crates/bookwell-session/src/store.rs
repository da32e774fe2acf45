//! In-memory session store.

use std::sync::RwLock;

use async_trait::async_trait;

use bookwell_core::AppResult;
use bookwell_core::traits::SessionStore;
use bookwell_entity::session::Session;

/// Session store that keeps the record in process memory.
///
/// The default store for tests and for embeddings that bring no
/// persistence layer of their own.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    record: RwLock<Option<Session>>,
}

#[async_trait]
impl SessionStore<Session> for InMemorySessionStore {
    async fn load(&self) -> AppResult<Option<Session>> {
        Ok(self.record.read().expect("store lock poisoned").clone())
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        *self.record.write().expect("store lock poisoned") = Some(session.clone());
        Ok(())
    }
}
