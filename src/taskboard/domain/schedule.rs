//! Declarative task schedule and per-task values.
//!
//! The source system enumerated every checklist item as its own named
//! field. Here each form type carries a schedule table instead: an ordered
//! list of task definitions, each with a key, a display label, and a value
//! kind. Completion counting and rendering become generic functions over
//! that table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of value a scheduled task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Completion checkbox.
    Flag,
    /// Time-of-day field attached to the task (e.g. closing start time).
    Time,
    /// Free-text field attached to the task.
    Text,
}

/// Value recorded against a scheduled task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TaskValue {
    /// Checkbox state.
    Flag(bool),
    /// Time-of-day text.
    Time(String),
    /// Free text.
    Text(String),
}

impl TaskValue {
    /// Returns whether this value counts as a completed task.
    ///
    /// A flag counts when set; a time or text value counts when non-empty
    /// after trimming.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        match self {
            Self::Flag(set) => *set,
            Self::Time(text) | Self::Text(text) => !text.trim().is_empty(),
        }
    }

    /// Returns the empty value for the given task kind.
    #[must_use]
    pub const fn empty(kind: TaskKind) -> Self {
        match kind {
            TaskKind::Flag => Self::Flag(false),
            TaskKind::Time => Self::Time(String::new()),
            TaskKind::Text => Self::Text(String::new()),
        }
    }
}

/// One entry of a form type's task schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    key: String,
    label: String,
    kind: TaskKind,
}

impl TaskDefinition {
    /// Creates a task definition.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }

    /// Returns the stable task key used in persisted value maps.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the operator-facing label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the kind of value this task records.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }
}

/// Ordered task schedule for one form type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSchedule {
    definitions: Vec<TaskDefinition>,
}

impl TaskSchedule {
    /// Builds a schedule from an ordered list of definitions.
    #[must_use]
    pub fn from_definitions(definitions: impl IntoIterator<Item = TaskDefinition>) -> Self {
        Self {
            definitions: definitions.into_iter().collect(),
        }
    }

    /// Returns the definitions in schedule order.
    #[must_use]
    pub fn definitions(&self) -> &[TaskDefinition] {
        &self.definitions
    }

    /// Looks up a definition by task key.
    #[must_use]
    pub fn definition(&self, key: &str) -> Option<&TaskDefinition> {
        self.definitions.iter().find(|def| def.key() == key)
    }

    /// Returns the number of scheduled tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns whether the schedule is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns the empty value map for a fresh shift.
    #[must_use]
    pub fn default_values(&self) -> BTreeMap<String, TaskValue> {
        self.definitions
            .iter()
            .map(|def| (def.key().to_owned(), TaskValue::empty(def.kind())))
            .collect()
    }

    /// Counts scheduled tasks whose recorded value is satisfied.
    ///
    /// Values for keys outside the schedule are ignored.
    #[must_use]
    pub fn completed_count(&self, values: &BTreeMap<String, TaskValue>) -> usize {
        self.definitions
            .iter()
            .filter(|def| {
                values
                    .get(def.key())
                    .is_some_and(TaskValue::is_satisfied)
            })
            .count()
    }
}
