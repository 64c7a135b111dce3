//! Processing-log recording with per-row duplicate detection.

use crate::taskboard::{
    domain::{LogEntryId, ProcessingLogEntry, ProcessingRow},
    ports::{ProcessingLogRepository, ProcessingLogRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;

/// Outcome of persisting one processing row.
#[derive(Debug)]
pub enum RowOutcome {
    /// The row was appended to the log.
    Saved(LogEntryId),
    /// The row does not qualify as a log entry and was skipped.
    SkippedIncomplete,
    /// An entry with the same operation number already exists; the row was
    /// not appended. Other rows in the same batch still save.
    DuplicateOperationNumber(String),
    /// The log store failed for this row; non-fatal, other rows still save.
    Failed(ProcessingLogRepositoryError),
}

impl RowOutcome {
    /// Returns whether the row was persisted.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Counts the rows a batch actually persisted.
#[must_use]
pub fn saved_count(outcomes: &[RowOutcome]) -> usize {
    outcomes.iter().filter(|outcome| outcome.is_saved()).count()
}

/// Service recording qualifying processing rows to the system-wide log.
///
/// Duplicate detection is a pre-check against existing entries followed by
/// an append. Under concurrent writers the check-then-act window can let a
/// duplicate through; the store enforces no uniqueness constraint. This
/// mirrors the observed system, where each record has a single editor.
#[derive(Clone)]
pub struct ProcessingLogService<R, K>
where
    R: ProcessingLogRepository,
    K: Clock + Send + Sync,
{
    log: Arc<R>,
    clock: Arc<K>,
}

impl<R, K> ProcessingLogService<R, K>
where
    R: ProcessingLogRepository,
    K: Clock + Send + Sync,
{
    /// Creates a new processing-log service.
    #[must_use]
    pub const fn new(log: Arc<R>, clock: Arc<K>) -> Self {
        Self { log, clock }
    }

    /// Records every qualifying row of a batch, returning one outcome per
    /// input row in order.
    ///
    /// Rows failing [`ProcessingRow::qualifies_for_log`] are skipped; a row
    /// whose operation number already exists in the log reports a duplicate
    /// outcome. Failures are per-row and never abort the batch.
    pub async fn record_rows(&self, rows: &[ProcessingRow]) -> Vec<RowOutcome> {
        let mut outcomes = Vec::with_capacity(rows.len());
        for row in rows {
            outcomes.push(self.record_row(row).await);
        }
        outcomes
    }

    async fn record_row(&self, row: &ProcessingRow) -> RowOutcome {
        let Some(entry) = ProcessingLogEntry::from_row(row, &*self.clock) else {
            return RowOutcome::SkippedIncomplete;
        };

        if let Some(operation_number) = entry.operation_number() {
            match self.log.operation_number_exists(operation_number).await {
                Ok(true) => {
                    return RowOutcome::DuplicateOperationNumber(operation_number.to_owned());
                }
                Ok(false) => {}
                Err(err) => {
                    log::warn!("duplicate check failed for operation {operation_number}: {err}");
                    return RowOutcome::Failed(err);
                }
            }
        }

        match self.log.append(&entry).await {
            Ok(()) => RowOutcome::Saved(entry.id()),
            Err(err) => {
                log::warn!("processing-log append failed: {err}");
                RowOutcome::Failed(err)
            }
        }
    }
}
