//! Orchestration services for taskboard synchronization.

mod debounce;
mod processing_log;
mod synchronizer;

pub use debounce::SyncDebounce;
pub use processing_log::{saved_count, ProcessingLogService, RowOutcome};
pub use synchronizer::{ResetOutcome, SyncOutcome, SyncServiceError, TaskboardSyncService};
