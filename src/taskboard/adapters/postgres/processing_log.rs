//! `PostgreSQL` repository implementation for the processing log.

use super::{
    models::{NewProcessingLogRow, ProcessingLogRow},
    repository::TaskboardPgPool,
    schema::processing_log,
};
use crate::taskboard::{
    domain::{LogEntryId, PersistedLogEntryData, ProcessingLogEntry},
    ports::{ProcessingLogRepository, ProcessingLogRepositoryError, ProcessingLogResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed processing log.
#[derive(Debug, Clone)]
pub struct PostgresProcessingLog {
    pool: TaskboardPgPool,
}

impl PostgresProcessingLog {
    /// Creates a new processing log from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskboardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProcessingLogResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProcessingLogResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(ProcessingLogRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProcessingLogRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProcessingLogRepository for PostgresProcessingLog {
    async fn operation_number_exists(&self, operation_number: &str) -> ProcessingLogResult<bool> {
        let lookup = operation_number.to_owned();
        self.run_blocking(move |connection| {
            let count: i64 = processing_log::table
                .filter(processing_log::operation_number.eq(&lookup))
                .count()
                .get_result(connection)
                .map_err(ProcessingLogRepositoryError::persistence)?;
            Ok(count > 0)
        })
        .await
    }

    async fn append(&self, entry: &ProcessingLogEntry) -> ProcessingLogResult<()> {
        let new_row = to_new_row(entry);
        self.run_blocking(move |connection| {
            diesel::insert_into(processing_log::table)
                .values(&new_row)
                .execute(connection)
                .map_err(ProcessingLogRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_operation_number(
        &self,
        operation_number: &str,
    ) -> ProcessingLogResult<Vec<ProcessingLogEntry>> {
        let lookup = operation_number.to_owned();
        self.run_blocking(move |connection| {
            let rows = processing_log::table
                .filter(processing_log::operation_number.eq(&lookup))
                .order(processing_log::logged_at.asc())
                .select(ProcessingLogRow::as_select())
                .load::<ProcessingLogRow>(connection)
                .map_err(ProcessingLogRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_entry).collect())
        })
        .await
    }
}

fn to_new_row(entry: &ProcessingLogEntry) -> NewProcessingLogRow {
    NewProcessingLogRow {
        id: entry.id().into_inner(),
        logged_at: entry.logged_at(),
        entry_time: entry.time().to_owned(),
        task_label: entry.task_label().to_owned(),
        system_name: entry.system_name().to_owned(),
        operation_number: entry.operation_number().map(str::to_owned),
        executed_by: entry.executed_by().to_owned(),
        category_tag: entry.category_tag().to_owned(),
    }
}

fn row_to_entry(row: ProcessingLogRow) -> ProcessingLogEntry {
    ProcessingLogEntry::from_persisted(PersistedLogEntryData {
        id: LogEntryId::from_uuid(row.id),
        logged_at: row.logged_at,
        time: row.entry_time,
        task_label: row.task_label,
        system_name: row.system_name,
        operation_number: row.operation_number,
        executed_by: row.executed_by,
        category_tag: row.category_tag,
    })
}
