//! Error types raised by store implementations.

use thiserror::Error;

/// Errors surfaced by [`super::KvStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted value at {key}: {reason}")]
    Corrupted { key: String, reason: String },
}
