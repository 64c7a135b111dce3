//! Processing-log integration tests over the in-memory log store.

use crate::in_memory::helpers::{log, operation_row, runtime};
use mockable::DefaultClock;
use opsdesk::taskboard::{
    adapters::memory::InMemoryProcessingLog,
    ports::ProcessingLogRepository,
    services::{saved_count, ProcessingLogService, RowOutcome},
};
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn service(log: &Arc<InMemoryProcessingLog>) -> ProcessingLogService<InMemoryProcessingLog, DefaultClock> {
    ProcessingLogService::new(Arc::clone(log), Arc::new(DefaultClock))
}

/// Tests that an operation number is rejected on resubmission, even from a
/// separate service instance.
#[rstest]
fn operation_numbers_stay_unique_across_services(
    runtime: io::Result<Runtime>,
    log: Arc<InMemoryProcessingLog>,
) {
    let rt = runtime.expect("runtime creation");

    let outcomes = rt.block_on(service(&log).record_rows(&[operation_row("OP-445")]));
    assert_eq!(saved_count(&outcomes), 1);

    let outcomes = rt.block_on(service(&log).record_rows(&[operation_row("OP-445")]));
    assert!(matches!(
        &outcomes[0],
        RowOutcome::DuplicateOperationNumber(number) if number == "OP-445"
    ));
    assert_eq!(log.entries().expect("log readable").len(), 1);
}

/// Tests lookup of persisted entries by operation number.
#[rstest]
fn recorded_entries_are_searchable_by_operation_number(
    runtime: io::Result<Runtime>,
    log: Arc<InMemoryProcessingLog>,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(service(&log).record_rows(&[operation_row("OP-445"), operation_row("OP-900")]));

    let found = rt
        .block_on(log.find_by_operation_number("OP-900"))
        .expect("lookup");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].operation_number(), Some("OP-900"));

    let missing = rt
        .block_on(log.find_by_operation_number("OP-000"))
        .expect("lookup");
    assert!(missing.is_empty());
}
