//! Repository port for durable taskboard record storage.

use crate::taskboard::domain::{RecordKey, TaskboardRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for taskboard repository operations.
pub type TaskboardRepositoryResult<T> = Result<T, TaskboardRepositoryError>;

/// Durable taskboard record persistence contract.
///
/// One row exists per [`RecordKey`]. At-most-one is maintained by a
/// find-before-insert in the synchronizer rather than by a storage-level
/// unique constraint, mirroring the hosted backend this port fronts.
#[async_trait]
pub trait TaskboardRepository: Send + Sync {
    /// Finds the record stored under the given key.
    ///
    /// Returns `None` when no row exists for the key.
    async fn find(&self, key: &RecordKey) -> TaskboardRepositoryResult<Option<TaskboardRecord>>;

    /// Inserts a new row under the given key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskboardRepositoryError::DuplicateRecord`] when a row
    /// already exists for the key.
    async fn insert(
        &self,
        key: &RecordKey,
        record: &TaskboardRecord,
    ) -> TaskboardRepositoryResult<()>;

    /// Updates the existing row under the given key in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskboardRepositoryError::NotFound`] when no row exists for
    /// the key.
    async fn update(
        &self,
        key: &RecordKey,
        record: &TaskboardRecord,
    ) -> TaskboardRepositoryResult<()>;

    /// Deletes the row under the given key.
    ///
    /// Deleting a missing row is not an error; the reset action must be
    /// idempotent.
    async fn delete(&self, key: &RecordKey) -> TaskboardRepositoryResult<()>;
}

/// Errors returned by taskboard repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskboardRepositoryError {
    /// A row already exists for the key.
    #[error("duplicate taskboard record: {0}")]
    DuplicateRecord(RecordKey),

    /// No row exists for the key.
    #[error("taskboard record not found: {0}")]
    NotFound(RecordKey),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskboardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
