//! Gating decisions for protected views.

use tenura_core::access;
use tenura_core::models::role::Role;

use crate::store::SessionState;

/// What a protected view should do given the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session state is not known yet: render a neutral/loading state.
    /// Redirecting now would bounce a user whose session is still being
    /// restored.
    Pending,
    Render,
    RedirectToEntry,
}

/// Resolve a gate for a view restricted to `allowed` roles.
///
/// Fails closed: an unauthenticated identity or a role outside the
/// allowed set redirects to the entry screen.
pub fn evaluate(state: &SessionState, allowed: &[Role]) -> GateDecision {
    match state {
        SessionState::Uninitialized | SessionState::Loading => GateDecision::Pending,
        SessionState::Unauthenticated => GateDecision::RedirectToEntry,
        SessionState::Authenticated(identity) => {
            if access::can_access(Some(identity), allowed) {
                GateDecision::Render
            } else {
                GateDecision::RedirectToEntry
            }
        }
    }
}
