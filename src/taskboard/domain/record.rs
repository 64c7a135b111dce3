//! Taskboard record aggregate and its composite key.

use super::{FormDate, FormType, ProcessingRow, ShiftId, TaskValue, TurnEntry, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Task values recorded against one shift, keyed by task key.
pub type TaskValues = BTreeMap<String, TaskValue>;

/// Turn metadata per shift.
pub type TurnMap = BTreeMap<ShiftId, TurnEntry>;

/// Composite key identifying one durable taskboard row.
///
/// At most one record exists per `(user, form type, date)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    user_id: UserId,
    form_type: FormType,
    date: FormDate,
}

impl RecordKey {
    /// Creates a record key.
    #[must_use]
    pub const fn new(user_id: UserId, form_type: FormType, date: FormDate) -> Self {
        Self {
            user_id,
            form_type,
            date,
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the form type.
    #[must_use]
    pub const fn form_type(&self) -> FormType {
        self.form_type
    }

    /// Returns the form date.
    #[must_use]
    pub const fn date(&self) -> FormDate {
        self.date
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.user_id, self.form_type, self.date)
    }
}

/// Taskboard record aggregate root.
///
/// Holds the complete form state for one `(form type, date)`: turn metadata
/// and task values per shift, the ad-hoc processing table, and the
/// last-viewed shift tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskboardRecord {
    form_type: FormType,
    date: FormDate,
    turn_data: TurnMap,
    tasks: BTreeMap<ShiftId, TaskValues>,
    table_rows: Vec<ProcessingRow>,
    active_tab: Option<ShiftId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted taskboard record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskboardData {
    /// Persisted form type.
    pub form_type: FormType,
    /// Persisted form date.
    pub date: FormDate,
    /// Persisted turn metadata per shift.
    pub turn_data: TurnMap,
    /// Persisted task values per shift.
    pub tasks: BTreeMap<ShiftId, TaskValues>,
    /// Persisted ad-hoc processing rows.
    pub table_rows: Vec<ProcessingRow>,
    /// Persisted last-viewed shift tab.
    pub active_tab: Option<ShiftId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskboardRecord {
    /// Creates an empty record for the given form type and date.
    #[must_use]
    pub fn new(form_type: FormType, date: FormDate, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            form_type,
            date,
            turn_data: TurnMap::new(),
            tasks: BTreeMap::new(),
            table_rows: Vec::new(),
            active_tab: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskboardData) -> Self {
        Self {
            form_type: data.form_type,
            date: data.date,
            turn_data: data.turn_data,
            tasks: data.tasks,
            table_rows: data.table_rows,
            active_tab: data.active_tab,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the form type.
    #[must_use]
    pub const fn form_type(&self) -> FormType {
        self.form_type
    }

    /// Returns the form date.
    #[must_use]
    pub const fn date(&self) -> FormDate {
        self.date
    }

    /// Returns the turn metadata per shift.
    #[must_use]
    pub const fn turn_data(&self) -> &TurnMap {
        &self.turn_data
    }

    /// Returns the task values per shift.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<ShiftId, TaskValues> {
        &self.tasks
    }

    /// Returns the task values recorded against one shift, if any.
    #[must_use]
    pub fn shift_tasks(&self, shift: ShiftId) -> Option<&TaskValues> {
        self.tasks.get(&shift)
    }

    /// Returns the ad-hoc processing rows.
    #[must_use]
    pub fn table_rows(&self) -> &[ProcessingRow] {
        &self.table_rows
    }

    /// Returns the last-viewed shift tab. UI convenience, not business data.
    #[must_use]
    pub const fn active_tab(&self) -> Option<ShiftId> {
        self.active_tab
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the turn metadata for one shift.
    pub fn set_turn_entry(&mut self, shift: ShiftId, entry: TurnEntry, clock: &impl Clock) {
        self.turn_data.insert(shift, entry);
        self.touch(clock);
    }

    /// Records a task value against one shift.
    pub fn set_task_value(
        &mut self,
        shift: ShiftId,
        key: impl Into<String>,
        value: TaskValue,
        clock: &impl Clock,
    ) {
        self.tasks.entry(shift).or_default().insert(key.into(), value);
        self.touch(clock);
    }

    /// Replaces the ad-hoc processing table.
    pub fn set_table_rows(&mut self, rows: Vec<ProcessingRow>, clock: &impl Clock) {
        self.table_rows = rows;
        self.touch(clock);
    }

    /// Records the last-viewed shift tab.
    pub fn set_active_tab(&mut self, tab: Option<ShiftId>, clock: &impl Clock) {
        self.active_tab = tab;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
