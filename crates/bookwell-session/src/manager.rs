//! Session lifecycle manager — login, expiry watch, logout flows.

use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;
use tracing::{debug, info, warn};

use bookwell_core::config::routes::RoutesConfig;
use bookwell_core::config::session::SessionConfig;
use bookwell_core::traits::{Navigator, SessionStore};
use bookwell_entity::session::{AuthToken, Session, SessionState};
use bookwell_entity::user::User;

use crate::jwt::decode_claims;
use crate::watcher::WatcherHandle;

/// Owns the single client session record and drives its lifecycle.
///
/// One manager exists per running application; it is a cheap clonable
/// handle, so the watcher task and the UI layer can share it. The
/// session record is mutated only here; the schedule and forms crates
/// never touch it. Every mutation is reported to the persistence
/// collaborator.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<ManagerInner>,
}

struct ManagerInner {
    /// The session record. Injectable so tests can run multiple
    /// independent sessions.
    session: RwLock<Session>,
    /// Routing layer used for the logout redirect.
    navigator: Arc<dyn Navigator>,
    /// Persistence collaborator notified on every mutation.
    store: Arc<dyn SessionStore<Session>>,
    /// Expiry watcher task state.
    watcher: Mutex<WatcherHandle>,
    /// Watcher polling configuration.
    config: SessionConfig,
    /// Redirect targets.
    routes: RoutesConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.inner.config)
            .field("routes", &self.inner.routes)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with an empty session.
    pub fn new(
        navigator: Arc<dyn Navigator>,
        store: Arc<dyn SessionStore<Session>>,
        config: SessionConfig,
        routes: RoutesConfig,
    ) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                session: RwLock::new(Session::default()),
                navigator,
                store,
                watcher: Mutex::new(WatcherHandle::default()),
                config,
                routes,
            }),
        }
    }

    /// Returns a snapshot of the current session record.
    pub fn session(&self) -> Session {
        self.inner.snapshot()
    }

    /// Returns the derived lifecycle state.
    pub fn state(&self) -> SessionState {
        self.inner.snapshot().state()
    }

    /// Called once at application startup. Restores the last persisted
    /// session and starts the watcher iff a token was restored.
    pub async fn init(&self) {
        match self.inner.store.load().await {
            Ok(Some(restored)) => {
                let has_token = restored.has_token();
                *self.inner.session.write().expect("session lock poisoned") = restored;
                if has_token {
                    info!("Restored persisted session, starting expiry watcher");
                    self.start_watcher().await;
                } else {
                    debug!("Restored persisted session without token");
                }
            }
            Ok(None) => debug!("No persisted session to restore"),
            Err(e) => warn!(error = %e, "Failed to restore persisted session"),
        }
    }

    /// Records a successful login and starts the expiry watcher.
    pub async fn login(&self, token: AuthToken, user: User) {
        {
            let mut session = self.inner.session.write().expect("session lock poisoned");
            session.token = Some(token);
            session.user = Some(user);
            session.is_expired = false;
        }
        info!("Session established");
        self.inner.persist().await;
        self.start_watcher().await;
    }

    /// Starts the recurring expiry check.
    ///
    /// Without a token there is nothing to watch: the session is marked
    /// expired and no timer is started. A second start replaces the
    /// previous timer, so two concurrent watchers can never exist.
    pub async fn start_watcher(&self) {
        if !self.inner.snapshot().has_token() {
            self.inner.mark_expired();
            self.inner.persist().await;
            return;
        }

        let inner = Arc::clone(&self.inner);
        let period = tokio::time::Duration::from_millis(self.inner.config.poll_interval_ms);
        let task = tokio::spawn(async move {
            // First check fires one full period after start, like the
            // original recurring timer.
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                ticker.tick().await;
                inner.check_expiration().await;
            }
        });

        self.inner
            .watcher
            .lock()
            .expect("watcher lock poisoned")
            .replace(task);
        debug!(
            period_ms = self.inner.config.poll_interval_ms,
            "Expiry watcher started"
        );
    }

    /// Cancels the recurring expiry check. Idempotent.
    pub fn stop_watcher(&self) {
        self.inner.stop_watcher();
    }

    /// Whether the watcher task is currently running.
    pub fn watcher_running(&self) -> bool {
        self.inner
            .watcher
            .lock()
            .expect("watcher lock poisoned")
            .is_running()
    }

    /// Runs one expiry check against the wall clock.
    ///
    /// A missing token marks the session expired. A token whose claims
    /// cannot be decoded, or whose validity window has elapsed, marks the
    /// session expired and triggers logout. Otherwise the session stays
    /// active and the timer state is left untouched.
    pub async fn check_expiration(&self) {
        self.inner.check_expiration().await;
    }

    /// Clears the session, redirects to the landing route and stops the
    /// watcher. The redirect is fire-and-forget and never retried.
    pub async fn logout(&self) {
        self.inner.logout().await;
    }
}

impl ManagerInner {
    /// Clones out the current session record.
    fn snapshot(&self) -> Session {
        self.session.read().expect("session lock poisoned").clone()
    }

    /// Sets the expired flag without clearing the record.
    fn mark_expired(&self) {
        self.session
            .write()
            .expect("session lock poisoned")
            .is_expired = true;
    }

    /// Notifies the persistence collaborator of the current record.
    /// Storage failures are logged and swallowed; persistence is advisory.
    async fn persist(&self) {
        let snapshot = self.snapshot();
        if let Err(e) = self.store.save(&snapshot).await {
            warn!(error = %e, "Failed to persist session");
        }
    }

    fn stop_watcher(&self) {
        let stopped = self.watcher.lock().expect("watcher lock poisoned").stop();
        if stopped {
            debug!("Expiry watcher stopped");
        }
    }

    async fn check_expiration(&self) {
        let Some(token) = self.snapshot().token else {
            self.mark_expired();
            self.persist().await;
            return;
        };

        match decode_claims(&token.access_token) {
            Err(e) => {
                warn!(error = %e, "Access token claims could not be decoded");
                self.mark_expired();
                self.logout().await;
            }
            Ok(claims) => {
                let now_ms = Utc::now().timestamp_millis();
                if claims.is_expired_at(now_ms) {
                    info!(
                        session_id = claims.session_id,
                        "Access token expired, logging out"
                    );
                    self.mark_expired();
                    self.logout().await;
                }
            }
        }
    }

    async fn logout(&self) {
        {
            let mut session = self.session.write().expect("session lock poisoned");
            session.token = None;
            session.user = None;
        }
        info!("Session cleared, redirecting to landing route");
        self.persist().await;
        self.navigator.replace(&self.routes.landing);
        // Stopping last: a logout triggered from inside the watcher task
        // aborts that task, so everything before this line must already
        // have happened.
        self.stop_watcher();
    }
}
