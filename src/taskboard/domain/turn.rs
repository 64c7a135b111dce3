//! Turn metadata captured per shift.

use serde::{Deserialize, Serialize};

/// Operator and timing metadata for one shift of a taskboard form.
///
/// Mirrors the raw form state, so all fields are free text and may be
/// empty while the operator is still filling the form in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEntry {
    /// Operator on duty for the shift.
    pub operator_id: String,
    /// Shift start time as entered on the form.
    pub start_time: String,
    /// Shift end time as entered on the form.
    pub end_time: String,
    /// Free-form notes attached to the shift.
    pub notes: String,
}

impl TurnEntry {
    /// Creates a turn entry for the given operator with empty timing fields.
    #[must_use]
    pub fn for_operator(operator_id: impl Into<String>) -> Self {
        Self {
            operator_id: operator_id.into(),
            ..Self::default()
        }
    }

    /// Sets the shift start time.
    #[must_use]
    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    /// Sets the shift end time.
    #[must_use]
    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = end_time.into();
        self
    }

    /// Sets the free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
