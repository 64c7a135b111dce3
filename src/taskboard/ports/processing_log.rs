//! Repository port for the system-wide processing log.

use crate::taskboard::domain::ProcessingLogEntry;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for processing-log repository operations.
pub type ProcessingLogResult<T> = Result<T, ProcessingLogRepositoryError>;

/// Append-only persistence contract for processing-log entries.
///
/// Operation-number uniqueness is checked by the service before appending;
/// the store itself enforces no uniqueness constraint. See the duplicate
/// handling notes on `ProcessingLogService`.
#[async_trait]
pub trait ProcessingLogRepository: Send + Sync {
    /// Returns whether any persisted entry carries the operation number.
    async fn operation_number_exists(&self, operation_number: &str) -> ProcessingLogResult<bool>;

    /// Appends an entry to the log.
    async fn append(&self, entry: &ProcessingLogEntry) -> ProcessingLogResult<()>;

    /// Returns every persisted entry carrying the operation number.
    async fn find_by_operation_number(
        &self,
        operation_number: &str,
    ) -> ProcessingLogResult<Vec<ProcessingLogEntry>>;
}

/// Errors returned by processing-log repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProcessingLogRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProcessingLogRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
