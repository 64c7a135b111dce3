//! Diesel row models for taskboard persistence.

use super::schema::{processing_log, taskboard_records};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for taskboard records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = taskboard_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskboardRow {
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Form type storage string.
    pub form_type: String,
    /// Form date storage key.
    pub date: String,
    /// Turn metadata JSON payload.
    pub turn_data: Value,
    /// Task values JSON payload.
    pub tasks: Value,
    /// Processing rows JSON payload.
    pub table_rows: Value,
    /// Last-viewed shift tab.
    pub active_tab: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for taskboard records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = taskboard_records)]
pub struct NewTaskboardRow {
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Form type storage string.
    pub form_type: String,
    /// Form date storage key.
    pub date: String,
    /// Turn metadata JSON payload.
    pub turn_data: Value,
    /// Task values JSON payload.
    pub tasks: Value,
    /// Processing rows JSON payload.
    pub table_rows: Value,
    /// Last-viewed shift tab.
    pub active_tab: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when updating an existing taskboard row in place.
///
/// `treat_none_as_null` makes a cleared active tab persist as NULL instead
/// of leaving the previous value in place.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = taskboard_records, treat_none_as_null = true)]
pub struct TaskboardChangeset {
    /// Turn metadata JSON payload.
    pub turn_data: Value,
    /// Task values JSON payload.
    pub tasks: Value,
    /// Processing rows JSON payload.
    pub table_rows: Value,
    /// Last-viewed shift tab.
    pub active_tab: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for processing-log entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = processing_log)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProcessingLogRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Logging timestamp.
    pub logged_at: DateTime<Utc>,
    /// Processing time text.
    pub entry_time: String,
    /// Task description.
    pub task_label: String,
    /// System name.
    pub system_name: String,
    /// Operation number, if any.
    pub operation_number: Option<String>,
    /// Executing operator.
    pub executed_by: String,
    /// Category tag.
    pub category_tag: String,
}

/// Insert model for processing-log entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = processing_log)]
pub struct NewProcessingLogRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Logging timestamp.
    pub logged_at: DateTime<Utc>,
    /// Processing time text.
    pub entry_time: String,
    /// Task description.
    pub task_label: String,
    /// System name.
    pub system_name: String,
    /// Operation number, if any.
    pub operation_number: Option<String>,
    /// Executing operator.
    pub executed_by: String,
    /// Category tag.
    pub category_tag: String,
}
