//! Local-cache port and the per-form-type key layout.

use crate::taskboard::domain::FormType;
use std::sync::Arc;
use thiserror::Error;

/// Result type for local-cache operations.
pub type LocalCacheResult<T> = Result<T, LocalCacheError>;

/// Key-value cache local to the operator's session.
///
/// Serves as the write-through mirror of the durable store and as the sole
/// store for unauthenticated sessions. Values are JSON strings. Operations
/// are synchronous; the cache lives in the same process as the form model.
pub trait LocalCache: Send + Sync {
    /// Reads the value stored under the key, if any.
    fn get(&self, key: &str) -> LocalCacheResult<Option<String>>;

    /// Stores a value under the key, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> LocalCacheResult<()>;

    /// Removes the key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> LocalCacheResult<()>;
}

/// Errors returned by local-cache implementations.
#[derive(Debug, Clone, Error)]
pub enum LocalCacheError {
    /// Storage-layer failure.
    #[error("local cache error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl LocalCacheError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

/// The cache keys mirroring one form type's state.
///
/// Layout per form type: `<prefix>-date`, `<prefix>-turnData`,
/// `<prefix>-tasks`, `<prefix>-tableRows` and `<prefix>-activeTab`, with
/// the prefix taken from [`FormType::cache_prefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeys {
    date: String,
    turn_data: String,
    tasks: String,
    table_rows: String,
    active_tab: String,
}

impl CacheKeys {
    /// Builds the key set for the given form type.
    #[must_use]
    pub fn for_form(form_type: FormType) -> Self {
        let prefix = form_type.cache_prefix();
        Self {
            date: format!("{prefix}-date"),
            turn_data: format!("{prefix}-turnData"),
            tasks: format!("{prefix}-tasks"),
            table_rows: format!("{prefix}-tableRows"),
            active_tab: format!("{prefix}-activeTab"),
        }
    }

    /// Key holding the mirrored form date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Key holding the mirrored turn metadata.
    #[must_use]
    pub fn turn_data(&self) -> &str {
        &self.turn_data
    }

    /// Key holding the mirrored task values.
    #[must_use]
    pub fn tasks(&self) -> &str {
        &self.tasks
    }

    /// Key holding the mirrored processing table.
    #[must_use]
    pub fn table_rows(&self) -> &str {
        &self.table_rows
    }

    /// Key holding the mirrored active tab.
    #[must_use]
    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    /// Iterates over every key of the layout.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.date.as_str(),
            self.turn_data.as_str(),
            self.tasks.as_str(),
            self.table_rows.as_str(),
            self.active_tab.as_str(),
        ]
        .into_iter()
    }
}
