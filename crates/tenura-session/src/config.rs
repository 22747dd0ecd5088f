//! Session configuration.

use std::time::Duration;

use tenura_core::navigation::routes;

/// Configuration for the session layer.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Inactivity window after which the session is terminated
    /// (default: 1 hour).
    pub inactivity_timeout: Duration,
    /// Route navigated to on logout, failed gating, or inactivity
    /// expiry.
    pub entry_route: &'static str,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout: Duration::from_secs(3600),
            entry_route: routes::ENTRY,
        }
    }
}
