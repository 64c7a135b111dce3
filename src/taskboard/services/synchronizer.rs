//! Taskboard record synchronizer.
//!
//! Keeps the operator's in-memory form state consistent with the durable
//! row for `(user, form type, date)`. The durable store is the source of
//! truth when a user is authenticated; the local cache is a write-through
//! fallback for the unauthenticated case and a recovery path after data
//! loss in the durable store. There is no conflict resolution: last writer
//! wins, which is acceptable because each key is edited by exactly one
//! operator in practice. Operations are attempted once, with no retry.

use crate::taskboard::{
    domain::{
        FormDate, FormType, PersistedTaskboardData, RecordKey, ShiftId, TaskboardRecord, TurnMap,
        UserId,
    },
    ports::{
        CacheKeys, LocalCache, LocalCacheError, TaskboardRepository, TaskboardRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Result of a [`TaskboardSyncService::sync`] call.
#[derive(Debug)]
pub enum SyncOutcome {
    /// No authenticated user; the caller's own local-cache mirror stands.
    Skipped,
    /// The durable row was written and the cache mirror refreshed.
    Synced,
    /// The durable write failed; state remains in memory and local cache.
    ///
    /// Surfaced to the operator as a "saved locally, not synced to cloud"
    /// notice, never as a fatal error.
    LocalOnly(TaskboardRepositoryError),
}

/// Result of a [`TaskboardSyncService::reset`] call.
#[derive(Debug)]
pub enum ResetOutcome {
    /// Durable row (if any) deleted and local-cache keys cleared.
    Cleared,
    /// The durable delete failed; local-cache keys were cleared anyway.
    CacheOnly(TaskboardRepositoryError),
}

/// Errors for synchronizer operations that cannot degrade gracefully.
///
/// Durable-store failures are reported through [`SyncOutcome`] and
/// [`ResetOutcome`] instead; only local infrastructure failures surface
/// here.
#[derive(Debug, Error)]
pub enum SyncServiceError {
    /// The local cache failed.
    #[error(transparent)]
    Cache(#[from] LocalCacheError),
    /// A cache value failed to encode or decode.
    #[error("cache mirror encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for synchronizer operations.
pub type SyncServiceResult<T> = Result<T, SyncServiceError>;

/// Taskboard record synchronization service.
#[derive(Clone)]
pub struct TaskboardSyncService<R, C, K>
where
    R: TaskboardRepository,
    C: LocalCache,
    K: Clock + Send + Sync,
{
    repository: Arc<R>,
    cache: Arc<C>,
    clock: Arc<K>,
    session: Option<UserId>,
}

impl<R, C, K> TaskboardSyncService<R, C, K>
where
    R: TaskboardRepository,
    C: LocalCache,
    K: Clock + Send + Sync,
{
    /// Creates a synchronizer with no authenticated session.
    #[must_use]
    pub const fn new(repository: Arc<R>, cache: Arc<C>, clock: Arc<K>) -> Self {
        Self {
            repository,
            cache,
            clock,
            session: None,
        }
    }

    /// Attaches the authenticated user whose rows this service manages.
    #[must_use]
    pub const fn with_session(mut self, user_id: UserId) -> Self {
        self.session = Some(user_id);
        self
    }

    /// Returns the authenticated user, if any.
    #[must_use]
    pub const fn session(&self) -> Option<UserId> {
        self.session
    }

    /// Pushes the complete current form state to the durable store.
    ///
    /// Without an authenticated user this is a no-op: the caller's own
    /// effects already mirror state to the local cache. With a user, the
    /// existing row for the record's key is updated in place, or a new row
    /// inserted, and after a successful durable write the same fields are
    /// mirrored into the local cache. A durable-write failure yields
    /// [`SyncOutcome::LocalOnly`]; memory and cache are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`SyncServiceError`] when the local cache itself fails.
    pub async fn sync(&self, record: &TaskboardRecord) -> SyncServiceResult<SyncOutcome> {
        let Some(user_id) = self.session else {
            return Ok(SyncOutcome::Skipped);
        };
        let key = RecordKey::new(user_id, record.form_type(), record.date());

        let write = match self.repository.find(&key).await {
            Ok(Some(_)) => self.repository.update(&key, record).await,
            Ok(None) => self.repository.insert(&key, record).await,
            Err(err) => Err(err),
        };

        match write {
            Ok(()) => {
                self.mirror_to_cache(record)?;
                Ok(SyncOutcome::Synced)
            }
            Err(err) => {
                log::warn!("taskboard sync failed for {key}, state kept locally: {err}");
                Ok(SyncOutcome::LocalOnly(err))
            }
        }
    }

    /// Loads the record for `(session user, form type, date)`.
    ///
    /// Without an authenticated user this returns `None` and the caller
    /// falls back to its own local-cache read. A durable hit wins; on a
    /// durable miss the local-cache mirror is consulted and, when it holds
    /// state for the requested date, written through to the durable store
    /// (self-healing one-way sync) before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`SyncServiceError`] when the local cache fails or a cached
    /// value does not decode.
    pub async fn load(
        &self,
        form_type: FormType,
        date: FormDate,
    ) -> SyncServiceResult<Option<TaskboardRecord>> {
        let Some(user_id) = self.session else {
            return Ok(None);
        };
        let key = RecordKey::new(user_id, form_type, date);

        match self.repository.find(&key).await {
            Ok(Some(record)) => return Ok(Some(record)),
            Ok(None) => {}
            Err(err) => {
                log::warn!("taskboard lookup failed for {key}, trying local cache: {err}");
            }
        }

        let Some(record) = self.read_cache_mirror(form_type, date)? else {
            return Ok(None);
        };
        if let Err(err) = self.repository.insert(&key, &record).await {
            log::warn!("self-healing write-through failed for {key}: {err}");
        }
        Ok(Some(record))
    }

    /// Deletes the durable row and clears the local-cache mirror.
    ///
    /// The durable delete only runs with an authenticated user and its
    /// failure is non-fatal; the local-cache keys for the form type are
    /// removed unconditionally either way.
    ///
    /// # Errors
    ///
    /// Returns [`SyncServiceError`] when the local cache itself fails.
    pub async fn reset(
        &self,
        form_type: FormType,
        date: FormDate,
    ) -> SyncServiceResult<ResetOutcome> {
        let mut durable_failure = None;
        if let Some(user_id) = self.session {
            let key = RecordKey::new(user_id, form_type, date);
            if let Err(err) = self.repository.delete(&key).await {
                log::warn!("taskboard reset failed for {key}, cache cleared anyway: {err}");
                durable_failure = Some(err);
            }
        }

        let keys = CacheKeys::for_form(form_type);
        for cache_key in keys.iter() {
            self.cache.remove(cache_key)?;
        }

        Ok(durable_failure.map_or(ResetOutcome::Cleared, ResetOutcome::CacheOnly))
    }

    fn mirror_to_cache(&self, record: &TaskboardRecord) -> SyncServiceResult<()> {
        let keys = CacheKeys::for_form(record.form_type());
        self.cache
            .put(keys.date(), &serde_json::to_string(&record.date())?)?;
        self.cache
            .put(keys.turn_data(), &serde_json::to_string(record.turn_data())?)?;
        self.cache
            .put(keys.tasks(), &serde_json::to_string(record.tasks())?)?;
        self.cache
            .put(keys.table_rows(), &serde_json::to_string(record.table_rows())?)?;
        self.cache
            .put(keys.active_tab(), &serde_json::to_string(&record.active_tab())?)?;
        Ok(())
    }

    fn read_cache_mirror(
        &self,
        form_type: FormType,
        date: FormDate,
    ) -> SyncServiceResult<Option<TaskboardRecord>> {
        let keys = CacheKeys::for_form(form_type);
        let Some(raw_date) = self.cache.get(keys.date())? else {
            return Ok(None);
        };
        let cached_date: FormDate = serde_json::from_str(&raw_date)?;
        // The mirror holds one snapshot per form type; a snapshot for a
        // different date is stale, not a match.
        if cached_date != date {
            return Ok(None);
        }

        let turn_data: TurnMap = self.read_cached_value(keys.turn_data())?.unwrap_or_default();
        let tasks = self.read_cached_value(keys.tasks())?.unwrap_or_default();
        let table_rows = self.read_cached_value(keys.table_rows())?.unwrap_or_default();
        let active_tab: Option<ShiftId> =
            self.read_cached_value(keys.active_tab())?.unwrap_or_default();

        let timestamp = self.clock.utc();
        Ok(Some(TaskboardRecord::from_persisted(
            PersistedTaskboardData {
                form_type,
                date,
                turn_data,
                tasks,
                table_rows,
                active_tab,
                created_at: timestamp,
                updated_at: timestamp,
            },
        )))
    }

    fn read_cached_value<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> SyncServiceResult<Option<T>> {
        self.cache
            .get(key)?
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(SyncServiceError::from)
    }
}
