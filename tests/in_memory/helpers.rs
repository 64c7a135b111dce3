//! Shared test helpers for in-memory adapter integration tests.

use mockable::DefaultClock;
use opsdesk::taskboard::{
    adapters::memory::{InMemoryLocalCache, InMemoryProcessingLog, InMemoryTaskboardRepository},
    domain::{FormDate, FormType, ProcessingRow, ShiftId, TaskValue, TaskboardRecord, TurnEntry, UserId},
    services::TaskboardSyncService,
};
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Synchronizer wired to in-memory adapters.
pub type InMemorySyncService =
    TaskboardSyncService<InMemoryTaskboardRepository, InMemoryLocalCache, DefaultClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory taskboard repository for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryTaskboardRepository> {
    Arc::new(InMemoryTaskboardRepository::new())
}

/// Provides a fresh in-memory local cache for each test.
#[fixture]
pub fn cache() -> Arc<InMemoryLocalCache> {
    Arc::new(InMemoryLocalCache::new())
}

/// Provides a fresh in-memory processing log for each test.
#[fixture]
pub fn log() -> Arc<InMemoryProcessingLog> {
    Arc::new(InMemoryProcessingLog::new())
}

/// Provides a clock for record creation.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Provides an authenticated user ID for tests.
#[fixture]
pub fn user() -> UserId {
    UserId::new()
}

/// Builds a synchronizer over the given adapters for the given user.
pub fn sync_service(
    repo: &Arc<InMemoryTaskboardRepository>,
    cache: &Arc<InMemoryLocalCache>,
    user: UserId,
) -> InMemorySyncService {
    TaskboardSyncService::new(Arc::clone(repo), Arc::clone(cache), Arc::new(DefaultClock))
        .with_session(user)
}

/// Returns the form date every helper record is keyed to.
pub fn form_date() -> FormDate {
    FormDate::from_key("2025-01-15").expect("valid date key")
}

/// Builds a day-shift record with turn data, task values, and one
/// processing row filled in.
pub fn filled_record(clock: &DefaultClock) -> TaskboardRecord {
    let mut record = TaskboardRecord::new(FormType::DayNormal, form_date(), clock);
    let shift = ShiftId::new(1, FormType::DayNormal).expect("valid shift");
    record.set_turn_entry(
        shift,
        TurnEntry::for_operator("op-17")
            .with_start_time("22:00")
            .with_end_time("06:00"),
        clock,
    );
    record.set_task_value(shift, "backup_check", TaskValue::Flag(true), clock);
    record.set_table_rows(vec![operation_row("OP-445")], clock);
    record.set_active_tab(Some(shift), clock);
    record
}

/// Builds a processing row that qualifies for the log via its system and
/// operation number.
pub fn operation_row(operation_number: &str) -> ProcessingRow {
    ProcessingRow {
        sequence_id: 1,
        time: "23:10".to_owned(),
        task_label: String::new(),
        system_name: "SWIFT".to_owned(),
        operation_number: operation_number.to_owned(),
        executed_by: "op-17".to_owned(),
        category_tag: "transfer".to_owned(),
    }
}
