//! Clock-driven expiring cache.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Expiring cache for computed dashboard statistics.
///
/// Entries live for a fixed time-to-live from insertion; reads consult the
/// injected clock, so a lookup past the TTL misses even if nothing has
/// evicted the entry yet.
#[derive(Clone)]
pub struct StatsCache<T, V, K>
where
    T: Eq + Hash,
    V: Clone,
    K: Clock + Send + Sync,
{
    entries: HashMap<T, (V, DateTime<Utc>)>,
    ttl: TimeDelta,
    clock: Arc<K>,
}

impl<T, V, K> StatsCache<T, V, K>
where
    T: Eq + Hash,
    V: Clone,
    K: Clock + Send + Sync,
{
    /// Creates an empty cache with the given time-to-live.
    #[must_use]
    pub fn new(ttl: TimeDelta, clock: Arc<K>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    /// Returns the cached value for the key when it has not expired.
    #[must_use]
    pub fn get(&self, key: &T) -> Option<V> {
        let now = self.clock.utc();
        self.entries.get(key).and_then(|(value, stored_at)| {
            (now - *stored_at < self.ttl).then(|| value.clone())
        })
    }

    /// Stores a value under the key, stamping the current clock time.
    pub fn put(&mut self, key: T, value: V) {
        let now = self.clock.utc();
        self.entries.insert(key, (value, now));
    }

    /// Removes every expired entry.
    pub fn purge_expired(&mut self) {
        let now = self.clock.utc();
        let ttl = self.ttl;
        self.entries
            .retain(|_, (_, stored_at)| now - *stored_at < ttl);
    }

    /// Removes every entry regardless of age.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries held, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
