//! Durable client storage seam.
//!
//! The embedding client provides a synchronous, string-keyed key-value
//! store scoped to the device, surviving reloads. All access goes
//! through the [`Storage`] trait so the session layer has no dependency
//! on any concrete backend; implementations live in `tenura-store`.

use std::sync::Arc;

use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// The single serialized [`SessionRecord`](crate::models::record::SessionRecord).
    pub const SESSION: &str = "session";
    /// Legacy split layout, read only for migration: the bare token.
    pub const LEGACY_AUTH_TOKEN: &str = "authToken";
    /// Legacy split layout, read only for migration: the profile record.
    pub const LEGACY_USER: &str = "user";
    /// A manager's currently selected landlord account.
    pub const SELECTED_LANDLORD: &str = "selectedLandlord";
    /// Boolean-as-string flag: the install prompt was dismissed.
    pub const INSTALL_PROMPT_DISMISSED: &str = "pwa-install-dismissed";
}

#[derive(Debug, Error)]
pub enum StorageError {
    /// No durable storage exists in this execution context (e.g. a
    /// server-side render). Callers degrade to in-memory state.
    #[error("durable storage is unavailable in this context")]
    Unavailable,

    /// A write was rejected (quota, permissions). The write is
    /// abandoned; callers keep their in-memory state.
    #[error("storage write failed: {0}")]
    WriteFailed(String),

    #[error("storage read failed: {0}")]
    ReadFailed(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous string-keyed key-value storage.
///
/// Mutation is serialized by the single-threaded event loop of the
/// embedding client; implementations only need interior mutability, not
/// a locking discipline.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
