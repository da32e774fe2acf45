//! Integration tests for the session lifecycle.

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use chrono::Utc;

use bookwell::core::config::routes::RoutesConfig;
use bookwell::core::config::session::SessionConfig;
use bookwell::core::traits::{Navigator, SessionStore};
use bookwell::entity::session::{Session, SessionState};
use bookwell::session::{InMemorySessionStore, RouteDecision, SessionManager, route_guard};

use crate::helpers::{RecordingNavigator, test_manager, test_user, token_with_exp};

#[tokio::test(start_paused = true)]
async fn valid_session_survives_watcher_ticks() {
    let (manager, navigator, _) = test_manager();

    let exp = Utc::now().timestamp() + 3600;
    manager.login(token_with_exp(exp), test_user()).await;
    assert_eq!(manager.state(), SessionState::Active);
    assert!(manager.watcher_running());

    // Several polling periods pass without any side effect.
    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(manager.state(), SessionState::Active);
    assert_eq!(navigator.count.load(Ordering::SeqCst), 0);
    manager.stop_watcher();
}

#[tokio::test(start_paused = true)]
async fn expired_session_is_logged_out_by_the_watcher() {
    let (manager, navigator, store) = test_manager();

    let exp = Utc::now().timestamp() - 1;
    manager.login(token_with_exp(exp), test_user()).await;
    assert!(manager.watcher_running());

    // First tick: the watcher logs out exactly once.
    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(manager.state(), SessionState::Expired);
    assert_eq!(navigator.count.load(Ordering::SeqCst), 1);
    assert_eq!(navigator.calls.lock().unwrap().as_slice(), &["/"]);
    assert!(!manager.watcher_running());

    // The cleared session reached the persistence collaborator.
    let persisted = store.load().await.unwrap().unwrap();
    assert!(persisted.token.is_none());
    assert!(persisted.is_expired);
}

#[tokio::test]
async fn restored_session_round_trip_starts_watcher() {
    let (first, _, store) = test_manager();
    let exp = Utc::now().timestamp() + 3600;
    first.login(token_with_exp(exp), test_user()).await;
    first.stop_watcher();

    // A second application run restoring from the same store.
    let manager = SessionManager::new(
        Arc::new(RecordingNavigator::default()) as Arc<dyn Navigator>,
        Arc::clone(&store) as Arc<dyn SessionStore<Session>>,
        SessionConfig::default(),
        RoutesConfig::default(),
    );
    manager.init().await;

    assert_eq!(manager.state(), SessionState::Active);
    assert_eq!(manager.session().user, Some(test_user_snapshot(&store).await));
    assert!(manager.watcher_running());
    manager.stop_watcher();
}

async fn test_user_snapshot(store: &Arc<InMemorySessionStore>) -> bookwell::entity::user::User {
    store.load().await.unwrap().unwrap().user.unwrap()
}

#[tokio::test]
async fn restored_session_without_token_starts_no_watcher() {
    let store = Arc::new(InMemorySessionStore::default());
    store
        .save(&Session {
            user: None,
            token: None,
            is_expired: true,
        })
        .await
        .unwrap();

    let manager = SessionManager::new(
        Arc::new(RecordingNavigator::default()) as Arc<dyn Navigator>,
        Arc::clone(&store) as Arc<dyn SessionStore<Session>>,
        SessionConfig::default(),
        RoutesConfig::default(),
    );
    manager.init().await;

    assert_eq!(manager.state(), SessionState::Expired);
    assert!(!manager.watcher_running());
}

#[tokio::test(start_paused = true)]
async fn double_start_never_doubles_the_check_cadence() {
    let (manager, navigator, _) = test_manager();

    let exp = Utc::now().timestamp() - 60;
    manager.login(token_with_exp(exp), test_user()).await;
    manager.start_watcher().await;

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(navigator.count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn route_guard_decision_table() {
    let routes = RoutesConfig::default();

    let authed = Session {
        token: Some(token_with_exp(0)),
        ..Default::default()
    };
    let anon = Session::default();

    assert_eq!(route_guard(&authed, "/", &routes), RouteDecision::ToHome);
    assert_eq!(route_guard(&authed, "/appointments", &routes), RouteDecision::Stay);
    assert_eq!(
        route_guard(&anon, "/appointments", &routes),
        RouteDecision::ToLanding
    );
    assert_eq!(route_guard(&anon, "/", &routes), RouteDecision::Stay);
}
