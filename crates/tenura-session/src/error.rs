//! Session error types.
//!
//! These are internal to the crate: the public session operations never
//! propagate them. A corrupt record or a failed write is logged and
//! recovered locally; the worst user-visible outcome is a redirect to
//! the entry screen.

use tenura_core::error::TenuraError;
use tenura_core::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The persisted record exists but does not parse, or references a
    /// role outside the closed set.
    #[error("corrupt session record: {0}")]
    CorruptRecord(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<SessionError> for TenuraError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::CorruptRecord(msg) => TenuraError::MalformedRecord(msg),
            SessionError::Storage(e) => TenuraError::Storage(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_the_core_error() {
        let err: TenuraError = SessionError::CorruptRecord("truncated".into()).into();
        assert!(matches!(err, TenuraError::MalformedRecord(_)));

        let err: TenuraError = SessionError::Storage(StorageError::Unavailable).into();
        assert!(matches!(
            err,
            TenuraError::Storage(StorageError::Unavailable)
        ));
    }
}
