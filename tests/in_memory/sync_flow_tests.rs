//! Synchronize, load, and reset flow through [`TaskboardSyncService`]
//! wired to in-memory adapters.

use crate::in_memory::helpers::{
    cache, clock, filled_record, form_date, repo, runtime, sync_service, user,
};
use mockable::DefaultClock;
use opsdesk::taskboard::{
    adapters::memory::{InMemoryLocalCache, InMemoryTaskboardRepository},
    domain::{FormType, UserId},
    ports::{CacheKeys, LocalCache},
    services::{ResetOutcome, SyncOutcome, TaskboardSyncService},
};
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Tests the full sync-then-load round trip.
#[rstest]
fn synced_record_loads_back_identically(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    cache: Arc<InMemoryLocalCache>,
    clock: DefaultClock,
    user: UserId,
) {
    let rt = runtime.expect("runtime creation");
    let service = sync_service(&repo, &cache, user);
    let record = filled_record(&clock);

    let outcome = rt.block_on(service.sync(&record)).expect("sync");
    assert!(matches!(outcome, SyncOutcome::Synced));

    let loaded = rt
        .block_on(service.load(FormType::DayNormal, form_date()))
        .expect("load");
    assert_eq!(loaded, Some(record));
}

/// Tests that syncing mirrors every form field into the local cache.
#[rstest]
fn sync_populates_every_cache_key(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    cache: Arc<InMemoryLocalCache>,
    clock: DefaultClock,
    user: UserId,
) {
    let rt = runtime.expect("runtime creation");
    let service = sync_service(&repo, &cache, user);

    rt.block_on(service.sync(&filled_record(&clock)))
        .expect("sync");

    let keys = CacheKeys::for_form(FormType::DayNormal);
    for cache_key in keys.iter() {
        assert!(
            cache.get(cache_key).expect("cache readable").is_some(),
            "missing cache mirror key {cache_key}"
        );
    }
}

/// Tests recovery from durable data loss via the cache mirror.
#[rstest]
fn cache_mirror_restores_a_lost_durable_row(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    cache: Arc<InMemoryLocalCache>,
    clock: DefaultClock,
    user: UserId,
) {
    let rt = runtime.expect("runtime creation");
    let record = filled_record(&clock);
    rt.block_on(sync_service(&repo, &cache, user).sync(&record))
        .expect("sync");

    let fresh_repo = Arc::new(InMemoryTaskboardRepository::new());
    let service = sync_service(&fresh_repo, &cache, user);

    let loaded = rt
        .block_on(service.load(FormType::DayNormal, form_date()))
        .expect("load")
        .expect("cache mirror restores the record");
    assert_eq!(loaded.turn_data(), record.turn_data());
    assert_eq!(loaded.tasks(), record.tasks());
    assert_eq!(loaded.table_rows(), record.table_rows());
    assert_eq!(fresh_repo.len().expect("repo readable"), 1);
}

/// Tests that reset removes both the durable row and the cache mirror.
#[rstest]
fn reset_clears_durable_and_cached_state(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    cache: Arc<InMemoryLocalCache>,
    clock: DefaultClock,
    user: UserId,
) {
    let rt = runtime.expect("runtime creation");
    let service = sync_service(&repo, &cache, user);
    rt.block_on(service.sync(&filled_record(&clock)))
        .expect("sync");

    let outcome = rt
        .block_on(service.reset(FormType::DayNormal, form_date()))
        .expect("reset");
    assert!(matches!(outcome, ResetOutcome::Cleared));

    assert!(repo.is_empty().expect("repo readable"));
    assert!(cache.is_empty().expect("cache readable"));
    let loaded = rt
        .block_on(service.load(FormType::DayNormal, form_date()))
        .expect("load");
    assert!(loaded.is_none());
}

/// Tests that the unauthenticated service never touches the durable store.
#[rstest]
fn anonymous_service_skips_durable_operations(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    cache: Arc<InMemoryLocalCache>,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let service = TaskboardSyncService::new(
        Arc::clone(&repo),
        Arc::clone(&cache),
        Arc::new(DefaultClock),
    );

    let outcome = rt
        .block_on(service.sync(&filled_record(&clock)))
        .expect("sync");
    assert!(matches!(outcome, SyncOutcome::Skipped));

    let loaded = rt
        .block_on(service.load(FormType::DayNormal, form_date()))
        .expect("load");
    assert!(loaded.is_none());
    assert!(repo.is_empty().expect("repo readable"));
}
