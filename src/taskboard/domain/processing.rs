//! Ad-hoc processing rows and persisted processing-log entries.

use super::LogEntryId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One row of the ad-hoc processing table on a taskboard form.
///
/// Mirrors raw form state; every field may be empty while the operator is
/// still typing. Only rows satisfying [`ProcessingRow::qualifies_for_log`]
/// are ever persisted to the system-wide processing log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRow {
    /// Position of the row within the form's table.
    pub sequence_id: u32,
    /// Time the processing happened, as entered on the form.
    pub time: String,
    /// Description of the task performed.
    pub task_label: String,
    /// System the operation ran against.
    pub system_name: String,
    /// Operation number assigned by the processing system.
    pub operation_number: String,
    /// Operator who executed the row.
    pub executed_by: String,
    /// Category tag used by the dashboards.
    pub category_tag: String,
}

impl ProcessingRow {
    /// Returns whether this row is complete enough to persist as a
    /// processing-log entry.
    ///
    /// A row qualifies when its time and executor are filled in, and it
    /// either names the task or names both the system and the operation
    /// number.
    #[must_use]
    pub fn qualifies_for_log(&self) -> bool {
        let has_time = !self.time.trim().is_empty();
        let has_executor = !self.executed_by.trim().is_empty();
        let has_label = !self.task_label.trim().is_empty();
        let has_operation =
            !self.system_name.trim().is_empty() && !self.operation_number.trim().is_empty();
        has_time && has_executor && (has_label || has_operation)
    }

    /// Returns the trimmed operation number, or `None` when blank.
    #[must_use]
    pub fn operation_number(&self) -> Option<&str> {
        let trimmed = self.operation_number.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Persisted entry of the system-wide processing log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingLogEntry {
    id: LogEntryId,
    logged_at: DateTime<Utc>,
    time: String,
    task_label: String,
    system_name: String,
    operation_number: Option<String>,
    executed_by: String,
    category_tag: String,
}

/// Parameter object for reconstructing a persisted log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLogEntryData {
    /// Persisted entry identifier.
    pub id: LogEntryId,
    /// Persisted logging timestamp.
    pub logged_at: DateTime<Utc>,
    /// Persisted processing time text.
    pub time: String,
    /// Persisted task description.
    pub task_label: String,
    /// Persisted system name.
    pub system_name: String,
    /// Persisted operation number, if any.
    pub operation_number: Option<String>,
    /// Persisted executing operator.
    pub executed_by: String,
    /// Persisted category tag.
    pub category_tag: String,
}

impl ProcessingLogEntry {
    /// Builds a log entry from a qualifying processing row.
    ///
    /// Returns `None` when the row does not satisfy
    /// [`ProcessingRow::qualifies_for_log`].
    #[must_use]
    pub fn from_row(row: &ProcessingRow, clock: &impl Clock) -> Option<Self> {
        if !row.qualifies_for_log() {
            return None;
        }
        Some(Self {
            id: LogEntryId::new(),
            logged_at: clock.utc(),
            time: row.time.trim().to_owned(),
            task_label: row.task_label.trim().to_owned(),
            system_name: row.system_name.trim().to_owned(),
            operation_number: row.operation_number().map(str::to_owned),
            executed_by: row.executed_by.trim().to_owned(),
            category_tag: row.category_tag.trim().to_owned(),
        })
    }

    /// Reconstructs a log entry from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedLogEntryData) -> Self {
        Self {
            id: data.id,
            logged_at: data.logged_at,
            time: data.time,
            task_label: data.task_label,
            system_name: data.system_name,
            operation_number: data.operation_number,
            executed_by: data.executed_by,
            category_tag: data.category_tag,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> LogEntryId {
        self.id
    }

    /// Returns the logging timestamp.
    #[must_use]
    pub const fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }

    /// Returns the processing time text.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the task description.
    #[must_use]
    pub fn task_label(&self) -> &str {
        &self.task_label
    }

    /// Returns the system name.
    #[must_use]
    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    /// Returns the operation number, if the entry carries one.
    #[must_use]
    pub fn operation_number(&self) -> Option<&str> {
        self.operation_number.as_deref()
    }

    /// Returns the executing operator.
    #[must_use]
    pub fn executed_by(&self) -> &str {
        &self.executed_by
    }

    /// Returns the category tag.
    #[must_use]
    pub fn category_tag(&self) -> &str {
        &self.category_tag
    }
}
