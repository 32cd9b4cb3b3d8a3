//! Error types raised by the repository layer.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityKind;
use crate::store::StoreError;

/// Errors surfaced by [`crate::EntityRepository`] operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to persist {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("no {kind} record with id {id}")]
    NotFound { kind: EntityKind, id: u32 },
}

pub type Result<T, E = RepositoryError> = std::result::Result<T, E>;

/// A bulk read that stopped at the first unreadable record.
///
/// Carries whatever was read before the failure so callers can still render
/// a partial list (the export path does).
#[derive(Debug, Error)]
#[error("{error}")]
pub struct PartialScan<T: fmt::Debug> {
    pub partial: Vec<T>,
    #[source]
    pub error: RepositoryError,
}

impl<T: fmt::Debug> PartialScan<T> {
    /// Logs the failure and surrenders the partial sequence.
    pub fn into_partial(self) -> Vec<T> {
        tracing::warn!(error = %self.error, "scan stopped early; keeping partial result");
        self.partial
    }
}
