//! Storage backend for contexts without durable storage.

use tenura_core::storage::{Storage, StorageError, StorageResult};

/// The explicit "no durable storage in this execution context" backend,
/// used during server-side render passes. Every operation reports
/// [`StorageError::Unavailable`]; the session layer maps that to "skip
/// persistence, keep in-memory state", so nothing faults.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl UnavailableStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for UnavailableStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }
}
