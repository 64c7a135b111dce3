//! Constraint tests for [`InMemoryTaskboardRepository`].
//!
//! Tests duplicate insertion, missing-row updates, and idempotent deletes.

use crate::in_memory::helpers::{clock, filled_record, form_date, repo, runtime, user};
use mockable::DefaultClock;
use opsdesk::taskboard::{
    adapters::memory::InMemoryTaskboardRepository,
    domain::{FormType, RecordKey, UserId},
    ports::{TaskboardRepository, TaskboardRepositoryError},
};
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Tests that inserting the same key twice is rejected.
#[rstest]
fn duplicate_key_insert_rejected(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    clock: DefaultClock,
    user: UserId,
) {
    let rt = runtime.expect("runtime creation");
    let record = filled_record(&clock);
    let key = RecordKey::new(user, FormType::DayNormal, form_date());

    rt.block_on(repo.insert(&key, &record)).expect("first insert");

    let result = rt.block_on(repo.insert(&key, &record));
    assert!(
        matches!(result, Err(TaskboardRepositoryError::DuplicateRecord(dup)) if dup == key),
        "Should reject a second insert for the same key"
    );
    assert_eq!(repo.len().expect("repo readable"), 1);
}

/// Tests that updating a missing row reports it as not found.
#[rstest]
fn update_of_missing_row_reports_not_found(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    clock: DefaultClock,
    user: UserId,
) {
    let rt = runtime.expect("runtime creation");
    let record = filled_record(&clock);
    let key = RecordKey::new(user, FormType::DayNormal, form_date());

    let result = rt.block_on(repo.update(&key, &record));
    assert!(
        matches!(result, Err(TaskboardRepositoryError::NotFound(missing)) if missing == key),
        "Should report the missing key"
    );
}

/// Tests that deleting a missing row succeeds.
#[rstest]
fn delete_is_idempotent(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    clock: DefaultClock,
    user: UserId,
) {
    let rt = runtime.expect("runtime creation");
    let record = filled_record(&clock);
    let key = RecordKey::new(user, FormType::DayNormal, form_date());

    rt.block_on(repo.delete(&key)).expect("delete of missing row");

    rt.block_on(repo.insert(&key, &record)).expect("insert");
    rt.block_on(repo.delete(&key)).expect("first delete");
    rt.block_on(repo.delete(&key)).expect("second delete");
    assert!(repo.is_empty().expect("repo readable"));
}

/// Tests that rows are isolated per user even for the same form and date.
#[rstest]
fn rows_are_keyed_per_user(
    runtime: io::Result<Runtime>,
    repo: Arc<InMemoryTaskboardRepository>,
    clock: DefaultClock,
) {
    let rt = runtime.expect("runtime creation");
    let record = filled_record(&clock);
    let first = RecordKey::new(UserId::new(), FormType::DayNormal, form_date());
    let second = RecordKey::new(UserId::new(), FormType::DayNormal, form_date());

    rt.block_on(repo.insert(&first, &record)).expect("first insert");
    rt.block_on(repo.insert(&second, &record)).expect("second insert");

    assert_eq!(repo.len().expect("repo readable"), 2);
    rt.block_on(repo.delete(&first)).expect("delete");
    let remaining = rt.block_on(repo.find(&second)).expect("find");
    assert!(remaining.is_some());
}
