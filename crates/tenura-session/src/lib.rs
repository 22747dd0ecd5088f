//! Tenura Session — session lifecycle, gating, and inactivity timeout.
//!
//! The [`SessionStore`] holds the current identity in memory and keeps
//! it synchronized with durable storage through the core storage seam.
//! [`gate`] turns session state plus an allowed-role set into a render
//! decision, and [`InactivityTimer`] terminates idle sessions.
//!
//! No error in this crate ever surfaces to the embedding client as a
//! fault: corrupt or unavailable storage degrades to "signed out", and a
//! failed write keeps the in-memory session usable.

pub mod config;
pub mod error;
pub mod gate;
pub mod store;
pub mod timer;

pub use config::SessionConfig;
pub use error::SessionError;
pub use gate::GateDecision;
pub use store::{SessionState, SessionStore};
pub use timer::InactivityTimer;
