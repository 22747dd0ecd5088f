//! redb-backed durable storage.

use std::path::Path;

use redb::{Database, ReadableDatabase, TableDefinition};
use tenura_core::storage::{Storage, StorageError, StorageResult};
use tracing::info;

const KV: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Durable key-value storage backed by a single-file redb database.
///
/// One transaction per logical operation: each `set`/`remove` commits
/// before returning, so a record is either fully present or fully
/// absent after a crash.
pub struct DiskStorage {
    db: Database,
}

impl DiskStorage {
    /// Open (or create) the store at `path` and make sure the table
    /// exists. Failure to open means this context has no usable durable
    /// storage, reported as [`StorageError::Unavailable`].
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let db = Database::create(path).map_err(|_| StorageError::Unavailable)?;

        let txn = db
            .begin_write()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        txn.open_table(KV)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        txn.commit()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        info!(path = %path.display(), "opened durable storage");
        Ok(Self { db })
    }
}

impl Storage for DiskStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;
        let table = txn
            .open_table(KV)
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;
        let value = table
            .get(key)
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        {
            let mut table = txn
                .open_table(KV)
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }
        txn.commit()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        {
            let mut table = txn
                .open_table(KV)
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
            table
                .remove(key)
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }
        txn.commit()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}
