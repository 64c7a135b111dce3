//! In-memory local cache.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::taskboard::ports::{LocalCache, LocalCacheError, LocalCacheResult};

/// Thread-safe in-memory key-value cache.
///
/// Stands in for the browser local storage the dashboard mirrors form
/// state into.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocalCache {
    state: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryLocalCache {
    /// Creates an empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the cache holds no keys.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backing lock is poisoned.
    pub fn is_empty(&self) -> LocalCacheResult<bool> {
        let state = self
            .state
            .read()
            .map_err(|err| LocalCacheError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.is_empty())
    }
}

impl LocalCache for InMemoryLocalCache {
    fn get(&self, key: &str) -> LocalCacheResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| LocalCacheError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> LocalCacheResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| LocalCacheError::storage(std::io::Error::other(err.to_string())))?;
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> LocalCacheResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| LocalCacheError::storage(std::io::Error::other(err.to_string())))?;
        state.remove(key);
        Ok(())
    }
}
