//! Inactivity timeout for the active session.

use std::sync::Arc;
use std::time::Duration;

use tenura_core::storage::Storage;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::config::SessionConfig;
use crate::store::SessionStore;

/// One-shot idle timer.
///
/// Every observed user interaction calls [`reset`](Self::reset); if a
/// full `timeout` window passes without a reset, the expiry action runs
/// exactly once and the timer terminates — a later window cannot fire
/// again. Dropping the handle cancels any pending expiry, so teardown
/// of the owner releases the timer with it.
pub struct InactivityTimer {
    reset_tx: mpsc::UnboundedSender<()>,
    handle: JoinHandle<()>,
}

impl InactivityTimer {
    /// Spawn the timer onto the current tokio runtime. `on_expiry`
    /// typically logs the session out and navigates to the entry route.
    pub fn spawn<F>(timeout: Duration, on_expiry: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (reset_tx, mut reset_rx) = mpsc::unbounded_channel::<()>();
        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = sleep(timeout) => {
                        debug!("inactivity timeout expired");
                        on_expiry();
                        return;
                    }
                    msg = reset_rx.recv() => {
                        match msg {
                            Some(()) => debug!("inactivity timer reset"),
                            // All senders dropped: the owner is gone.
                            None => return,
                        }
                    }
                }
            }
        });
        Self { reset_tx, handle }
    }

    /// Wiring for the common case: on expiry, log the session out and
    /// hand the configured entry route to the navigation callback.
    pub fn for_session<S, F>(
        config: &SessionConfig,
        store: Arc<SessionStore<S>>,
        navigate: F,
    ) -> Self
    where
        S: Storage + 'static,
        F: FnOnce(&'static str) + Send + 'static,
    {
        let entry_route = config.entry_route;
        Self::spawn(config.inactivity_timeout, move || {
            store.logout();
            navigate(entry_route);
        })
    }

    /// Restart the idle window. Cheap and non-blocking; call on every
    /// observed interaction event. A reset after expiry is a no-op.
    pub fn reset(&self) {
        let _ = self.reset_tx.send(());
    }

    /// Cancel the pending expiry without firing it.
    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl Drop for InactivityTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
