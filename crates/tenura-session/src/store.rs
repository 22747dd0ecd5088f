//! The session store: in-memory identity synchronized with durable
//! storage.

use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use serde::Deserialize;
use tenura_core::models::identity::Identity;
use tenura_core::models::landlord::SelectedLandlord;
use tenura_core::models::record::SessionRecord;
use tenura_core::storage::{Storage, StorageError, keys};
use tracing::{debug, info, warn};

use crate::error::SessionError;

/// Session lifecycle state.
///
/// `Uninitialized` and `Loading` are distinct from `Unauthenticated`:
/// until the initial storage read resolves, consumers must render a
/// neutral state rather than redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// [`SessionStore::initialize`] has not been called yet.
    Uninitialized,
    /// The initial storage read is in flight.
    Loading,
    Authenticated(Identity),
    Unauthenticated,
}

impl SessionState {
    /// True once the initial load has resolved either way.
    pub fn is_known(&self) -> bool {
        matches!(
            self,
            SessionState::Authenticated(_) | SessionState::Unauthenticated
        )
    }
}

/// Process-wide holder of the current identity.
///
/// Generic over the storage seam so the session layer has no dependency
/// on any concrete backend. Storage is read exactly once, in
/// [`initialize`](Self::initialize); every later accessor answers from
/// memory.
pub struct SessionStore<S: Storage> {
    storage: S,
    state: RwLock<SessionState>,
    selected_landlord: RwLock<Option<SelectedLandlord>>,
}

/// Profile half of the legacy two-key layout. The id arrives as either
/// an integer or a string depending on which client wrote it.
#[derive(Debug, Deserialize)]
struct LegacyProfile {
    id: serde_json::Value,
    name: String,
    email: String,
    role: String,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionState::Uninitialized),
            selected_landlord: RwLock::new(None),
        }
    }

    /// Load the persisted session, resolving the state machine to
    /// `Authenticated` or `Unauthenticated`.
    ///
    /// Never fails: a missing, unreadable, or corrupt record degrades to
    /// "signed out" with a logged diagnostic, and the corrupt record is
    /// discarded so the next load is clean.
    pub fn initialize(&self) -> SessionState {
        self.set_state(SessionState::Loading);

        // 1. Read the session record (with legacy-layout fallback).
        let next = match self.read_record() {
            Ok(Some(record)) => {
                info!(role = %record.role, "session restored");
                SessionState::Authenticated(record.into_identity())
            }
            Ok(None) => SessionState::Unauthenticated,
            Err(err) => {
                warn!(error = %err, "discarding unreadable session record");
                self.discard_persisted_session();
                SessionState::Unauthenticated
            }
        };

        // 2. Load the selected landlord, if any. Corrupt data is
        //    discarded the same way.
        let selected = match self.read_selected_landlord() {
            Ok(selected) => selected,
            Err(err) => {
                warn!(error = %err, "discarding unreadable selected-landlord record");
                self.remove_key(keys::SELECTED_LANDLORD);
                None
            }
        };
        *self
            .selected_landlord
            .write()
            .unwrap_or_else(PoisonError::into_inner) = selected;

        self.set_state(next.clone());
        next
    }

    /// Replace the in-memory identity and synchronize durable storage.
    ///
    /// The in-memory state always updates; a rejected write is logged
    /// and abandoned so the live session stays usable until reload.
    pub fn set_identity(&self, identity: Option<Identity>) {
        match identity {
            Some(identity) => {
                match serde_json::to_string(&SessionRecord::from_identity(&identity, Utc::now())) {
                    Ok(raw) => self.persist_key(keys::SESSION, &raw),
                    Err(err) => warn!(error = %err, "session record not serializable"),
                }
                self.set_state(SessionState::Authenticated(identity));
            }
            None => {
                self.discard_persisted_session();
                self.set_state(SessionState::Unauthenticated);
            }
        }
    }

    /// Sign out: clear the identity and the selected landlord.
    ///
    /// The inactivity timer is a separately owned scoped resource;
    /// dropping its handle cancels any pending expiry.
    pub fn logout(&self) {
        self.select_landlord(None);
        self.set_identity(None);
        info!("logged out");
    }

    /// Current in-memory identity. Never reads storage.
    pub fn identity(&self) -> Option<Identity> {
        match &*self.state.read().unwrap_or_else(PoisonError::into_inner) {
            SessionState::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set or clear the landlord a manager is operating on behalf of.
    pub fn select_landlord(&self, landlord: Option<SelectedLandlord>) {
        match &landlord {
            Some(selected) => match serde_json::to_string(selected) {
                Ok(raw) => self.persist_key(keys::SELECTED_LANDLORD, &raw),
                Err(err) => warn!(error = %err, "selected-landlord record not serializable"),
            },
            None => self.remove_key(keys::SELECTED_LANDLORD),
        }
        *self
            .selected_landlord
            .write()
            .unwrap_or_else(PoisonError::into_inner) = landlord;
    }

    pub fn selected_landlord(&self) -> Option<SelectedLandlord> {
        self.selected_landlord
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Record that the install prompt was dismissed on this device.
    /// Survives logout; it is a device preference, not session state.
    pub fn dismiss_install_prompt(&self) {
        self.persist_key(keys::INSTALL_PROMPT_DISMISSED, "true");
    }

    pub fn install_prompt_dismissed(&self) -> bool {
        matches!(
            self.storage.get(keys::INSTALL_PROMPT_DISMISSED),
            Ok(Some(value)) if value == "true"
        )
    }

    // -- storage plumbing ---------------------------------------------

    fn read_record(&self) -> Result<Option<SessionRecord>, SessionError> {
        match self.storage.get(keys::SESSION) {
            Ok(Some(raw)) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| SessionError::CorruptRecord(e.to_string())),
            Ok(None) => self.read_legacy_record(),
            Err(StorageError::Unavailable) => {
                debug!("no durable storage in this context");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fallback for records written by older clients as two separate
    /// keys. Requires both halves: a token without its profile (or the
    /// reverse) is the inconsistency the single-record layout exists to
    /// rule out, and is treated as signed out. On success the record is
    /// migrated forward and the legacy keys are removed.
    fn read_legacy_record(&self) -> Result<Option<SessionRecord>, SessionError> {
        let token = self.storage.get(keys::LEGACY_AUTH_TOKEN)?;
        let profile = self.storage.get(keys::LEGACY_USER)?;
        let (Some(token), Some(raw)) = (token, profile) else {
            return Ok(None);
        };

        let profile: LegacyProfile =
            serde_json::from_str(&raw).map_err(|e| SessionError::CorruptRecord(e.to_string()))?;
        let role = profile
            .role
            .parse()
            .map_err(|e| SessionError::CorruptRecord(format!("{e}")))?;
        let id = match profile.id {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(SessionError::CorruptRecord(format!(
                    "unsupported id value: {other}"
                )));
            }
        };

        let record = SessionRecord {
            id,
            name: profile.name,
            email: profile.email,
            role,
            token: Some(token),
            created_at: Utc::now(),
        };

        // Migrate forward, then drop the split layout.
        match serde_json::to_string(&record) {
            Ok(raw) => self.persist_key(keys::SESSION, &raw),
            Err(err) => warn!(error = %err, "legacy session record not serializable"),
        }
        self.remove_key(keys::LEGACY_AUTH_TOKEN);
        self.remove_key(keys::LEGACY_USER);
        info!("migrated legacy two-key session record");

        Ok(Some(record))
    }

    fn read_selected_landlord(&self) -> Result<Option<SelectedLandlord>, SessionError> {
        match self.storage.get(keys::SELECTED_LANDLORD) {
            Ok(Some(raw)) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| SessionError::CorruptRecord(e.to_string())),
            Ok(None) | Err(StorageError::Unavailable) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn discard_persisted_session(&self) {
        self.remove_key(keys::SESSION);
        self.remove_key(keys::LEGACY_AUTH_TOKEN);
        self.remove_key(keys::LEGACY_USER);
    }

    /// Write, swallowing failures: an unavailable or rejected store
    /// must never take the in-memory session down with it.
    fn persist_key(&self, key: &str, value: &str) {
        match self.storage.set(key, value) {
            Ok(()) => {}
            Err(StorageError::Unavailable) => debug!(key, "skipping write, storage unavailable"),
            Err(err) => warn!(key, error = %err, "write abandoned, in-memory state retained"),
        }
    }

    fn remove_key(&self, key: &str) {
        match self.storage.remove(key) {
            Ok(()) => {}
            Err(StorageError::Unavailable) => debug!(key, "skipping removal, storage unavailable"),
            Err(err) => warn!(key, error = %err, "removal abandoned"),
        }
    }

    fn set_state(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
