//! In-memory processing-log repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::taskboard::{
    domain::ProcessingLogEntry,
    ports::{ProcessingLogRepository, ProcessingLogRepositoryError, ProcessingLogResult},
};

/// Thread-safe in-memory processing log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProcessingLog {
    entries: Arc<RwLock<Vec<ProcessingLogEntry>>>,
}

impl InMemoryProcessingLog {
    /// Creates an empty in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every persisted entry in append order.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the backing lock is poisoned.
    pub fn entries(&self) -> ProcessingLogResult<Vec<ProcessingLogEntry>> {
        let entries = self.entries.read().map_err(|err| {
            ProcessingLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries.clone())
    }
}

#[async_trait]
impl ProcessingLogRepository for InMemoryProcessingLog {
    async fn operation_number_exists(&self, operation_number: &str) -> ProcessingLogResult<bool> {
        let entries = self.entries.read().map_err(|err| {
            ProcessingLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries
            .iter()
            .any(|entry| entry.operation_number() == Some(operation_number)))
    }

    async fn append(&self, entry: &ProcessingLogEntry) -> ProcessingLogResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            ProcessingLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        entries.push(entry.clone());
        Ok(())
    }

    async fn find_by_operation_number(
        &self,
        operation_number: &str,
    ) -> ProcessingLogResult<Vec<ProcessingLogEntry>> {
        let entries = self.entries.read().map_err(|err| {
            ProcessingLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries
            .iter()
            .filter(|entry| entry.operation_number() == Some(operation_number))
            .cloned()
            .collect())
    }
}
