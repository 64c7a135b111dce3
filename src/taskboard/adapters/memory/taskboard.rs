//! In-memory taskboard repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::taskboard::{
    domain::{RecordKey, TaskboardRecord},
    ports::{TaskboardRepository, TaskboardRepositoryError, TaskboardRepositoryResult},
};

/// Thread-safe in-memory taskboard repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskboardRepository {
    state: Arc<RwLock<HashMap<RecordKey, TaskboardRecord>>>,
}

impl InMemoryTaskboardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored rows.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the backing lock is poisoned.
    pub fn len(&self) -> TaskboardRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskboardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.len())
    }

    /// Returns whether the repository holds no rows.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the backing lock is poisoned.
    pub fn is_empty(&self) -> TaskboardRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl TaskboardRepository for InMemoryTaskboardRepository {
    async fn find(&self, key: &RecordKey) -> TaskboardRepositoryResult<Option<TaskboardRecord>> {
        let state = self.state.read().map_err(|err| {
            TaskboardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(key).cloned())
    }

    async fn insert(
        &self,
        key: &RecordKey,
        record: &TaskboardRecord,
    ) -> TaskboardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskboardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(key) {
            return Err(TaskboardRepositoryError::DuplicateRecord(*key));
        }
        state.insert(*key, record.clone());
        Ok(())
    }

    async fn update(
        &self,
        key: &RecordKey,
        record: &TaskboardRecord,
    ) -> TaskboardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskboardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(key) {
            return Err(TaskboardRepositoryError::NotFound(*key));
        }
        state.insert(*key, record.clone());
        Ok(())
    }

    async fn delete(&self, key: &RecordKey) -> TaskboardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskboardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.remove(key);
        Ok(())
    }
}
