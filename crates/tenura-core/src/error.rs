//! Error types for the Tenura system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenuraError {
    #[error("storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type TenuraResult<T> = Result<T, TenuraError>;
