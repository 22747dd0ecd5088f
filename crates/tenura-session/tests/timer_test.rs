//! Integration tests for the inactivity timer (paused tokio clock).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tenura_core::models::identity::Identity;
use tenura_core::models::role::Role;
use tenura_core::navigation::routes;
use tenura_session::config::SessionConfig;
use tenura_session::store::{SessionState, SessionStore};
use tenura_session::timer::InactivityTimer;
use tenura_store::MemoryStorage;

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let fired = Arc::new(AtomicUsize::new(0));
    let action = {
        let fired = fired.clone();
        move || {
            fired.fetch_add(1, Ordering::SeqCst);
        }
    };
    (fired, action)
}

#[tokio::test(start_paused = true)]
async fn fires_exactly_once_after_timeout() {
    let (fired, action) = counter();
    let _timer = InactivityTimer::spawn(Duration::from_secs(60), action);

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // The timer terminated after firing; a second window cannot elapse.
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn reset_defers_expiry() {
    let (fired, action) = counter();
    let timer = InactivityTimer::spawn(Duration::from_secs(60), action);

    tokio::time::sleep(Duration::from_secs(30)).await;
    timer.reset();
    tokio::task::yield_now().await;

    // t = 75s: past the original deadline, within the reset window.
    tokio::time::sleep(Duration::from_secs(45)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    // t = 105s: the reset window (30s + 60s) has elapsed.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_pending_expiry() {
    let (fired, action) = counter();
    let timer = InactivityTimer::spawn(Duration::from_secs(60), action);
    drop(timer);

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn cancel_consumes_the_timer() {
    let (fired, action) = counter();
    let timer = InactivityTimer::spawn(Duration::from_secs(60), action);

    tokio::time::sleep(Duration::from_secs(30)).await;
    timer.cancel();

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn reset_after_expiry_is_a_noop() {
    let (fired, action) = counter();
    let timer = InactivityTimer::spawn(Duration::from_secs(60), action);

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    timer.reset();
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn expiry_logs_the_session_out_and_redirects_once() {
    let store = Arc::new(SessionStore::new(MemoryStorage::new()));
    store.initialize();
    store.set_identity(Some(Identity {
        id: "1".into(),
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        role: Role::Landlord,
        token: Some("abc123".into()),
    }));

    let redirects = Arc::new(AtomicUsize::new(0));
    let config = SessionConfig::default();
    let _timer = InactivityTimer::for_session(&config, store.clone(), {
        let redirects = redirects.clone();
        move |route| {
            assert_eq!(route, routes::ENTRY);
            redirects.fetch_add(1, Ordering::SeqCst);
        }
    });

    // Default inactivity window is one hour.
    tokio::time::sleep(Duration::from_secs(3601)).await;
    assert_eq!(store.identity(), None);
    assert_eq!(store.state(), SessionState::Unauthenticated);
    assert_eq!(redirects.load(Ordering::SeqCst), 1);

    // Idempotent: no second expiry exists to fire.
    tokio::time::sleep(Duration::from_secs(7200)).await;
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
}
