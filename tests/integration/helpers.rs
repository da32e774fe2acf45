//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

use bookwell::core::config::routes::RoutesConfig;
use bookwell::core::config::session::SessionConfig;
use bookwell::core::traits::{Navigator, SessionStore};
use bookwell::entity::session::{AuthToken, Session};
use bookwell::entity::user::User;
use bookwell::session::{InMemorySessionStore, SessionManager};

/// Navigator that records every redirect it is asked to perform.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    /// Paths in call order.
    pub calls: Mutex<Vec<String>>,
    /// Total number of redirects.
    pub count: AtomicUsize,
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.calls.lock().unwrap().push(path.to_string());
        self.count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

/// Mint an unsigned access token carrying the given expiry.
pub fn token_with_exp(exp: i64) -> AuthToken {
    let payload = format!(r#"{{"exp": {exp}, "session_id": 1}}"#);
    AuthToken {
        access_token: format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode("signature")
        ),
        refresh_token: "refresh".to_string(),
    }
}

/// A user record as the scheduling API would return it.
pub fn test_user() -> User {
    User {
        user_id: 7,
        name: "Ada Lovelace".to_string(),
        username: "ada".to_string(),
        timezone: "America/New_York".to_string(),
        role: "member".to_string(),
        created_at: Utc::now(),
    }
}

/// A fresh manager with a recording navigator and in-memory store.
pub fn test_manager() -> (
    SessionManager,
    Arc<RecordingNavigator>,
    Arc<InMemorySessionStore>,
) {
    let navigator = Arc::new(RecordingNavigator::default());
    let store = Arc::new(InMemorySessionStore::default());
    let manager = SessionManager::new(
        Arc::clone(&navigator) as Arc<dyn Navigator>,
        Arc::clone(&store) as Arc<dyn SessionStore<Session>>,
        SessionConfig::default(),
        RoutesConfig::default(),
    );
    (manager, navigator, store)
}
