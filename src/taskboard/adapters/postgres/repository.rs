//! `PostgreSQL` repository implementation for taskboard record storage.

use super::{
    models::{NewTaskboardRow, TaskboardChangeset, TaskboardRow},
    schema::taskboard_records,
};
use crate::taskboard::{
    domain::{FormDate, FormType, PersistedTaskboardData, RecordKey, ShiftId, TaskboardRecord},
    ports::{TaskboardRepository, TaskboardRepositoryError, TaskboardRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by taskboard adapters.
pub type TaskboardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed taskboard repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskboardRepository {
    pool: TaskboardPgPool,
}

impl PostgresTaskboardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskboardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskboardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskboardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskboardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskboardRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskboardRepository for PostgresTaskboardRepository {
    async fn find(&self, key: &RecordKey) -> TaskboardRepositoryResult<Option<TaskboardRecord>> {
        let lookup_key = *key;
        self.run_blocking(move |connection| {
            let row = key_filter(lookup_key)
                .select(TaskboardRow::as_select())
                .first::<TaskboardRow>(connection)
                .optional()
                .map_err(TaskboardRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn insert(
        &self,
        key: &RecordKey,
        record: &TaskboardRecord,
    ) -> TaskboardRepositoryResult<()> {
        let insert_key = *key;
        let new_row = to_new_row(key, record)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(taskboard_records::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskboardRepositoryError::DuplicateRecord(insert_key)
                    }
                    _ => TaskboardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        key: &RecordKey,
        record: &TaskboardRecord,
    ) -> TaskboardRepositoryResult<()> {
        let update_key = *key;
        let changeset = to_changeset(record)?;
        self.run_blocking(move |connection| {
            let affected = diesel::update(key_filter(update_key))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskboardRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskboardRepositoryError::NotFound(update_key));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, key: &RecordKey) -> TaskboardRepositoryResult<()> {
        let delete_key = *key;
        self.run_blocking(move |connection| {
            diesel::delete(key_filter(delete_key))
                .execute(connection)
                .map_err(TaskboardRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

type KeyFilter = diesel::dsl::Find<taskboard_records::table, (uuid::Uuid, String, String)>;

fn key_filter(key: RecordKey) -> KeyFilter {
    taskboard_records::table.find((
        key.user_id().into_inner(),
        key.form_type().as_str().to_owned(),
        key.date().storage_key(),
    ))
}

fn to_new_row(key: &RecordKey, record: &TaskboardRecord) -> TaskboardRepositoryResult<NewTaskboardRow> {
    let changeset = to_changeset(record)?;
    Ok(NewTaskboardRow {
        user_id: key.user_id().into_inner(),
        form_type: key.form_type().as_str().to_owned(),
        date: key.date().storage_key(),
        turn_data: changeset.turn_data,
        tasks: changeset.tasks,
        table_rows: changeset.table_rows,
        active_tab: changeset.active_tab,
        created_at: record.created_at(),
        updated_at: record.updated_at(),
    })
}

fn to_changeset(record: &TaskboardRecord) -> TaskboardRepositoryResult<TaskboardChangeset> {
    let turn_data =
        serde_json::to_value(record.turn_data()).map_err(TaskboardRepositoryError::persistence)?;
    let tasks =
        serde_json::to_value(record.tasks()).map_err(TaskboardRepositoryError::persistence)?;
    let table_rows =
        serde_json::to_value(record.table_rows()).map_err(TaskboardRepositoryError::persistence)?;
    Ok(TaskboardChangeset {
        turn_data,
        tasks,
        table_rows,
        active_tab: record.active_tab().map(|tab| tab.value().to_string()),
        updated_at: record.updated_at(),
    })
}

fn row_to_record(row: TaskboardRow) -> TaskboardRepositoryResult<TaskboardRecord> {
    let TaskboardRow {
        user_id: _,
        form_type: persisted_form_type,
        date: persisted_date,
        turn_data,
        tasks,
        table_rows,
        active_tab,
        created_at,
        updated_at,
    } = row;

    let form_type = FormType::try_from(persisted_form_type.as_str())
        .map_err(TaskboardRepositoryError::persistence)?;
    let date = FormDate::from_key(&persisted_date).map_err(TaskboardRepositoryError::persistence)?;
    let active_tab = active_tab
        .map(|tab| parse_active_tab(&tab, form_type))
        .transpose()?;

    let data = PersistedTaskboardData {
        form_type,
        date,
        turn_data: serde_json::from_value(turn_data)
            .map_err(TaskboardRepositoryError::persistence)?,
        tasks: serde_json::from_value(tasks).map_err(TaskboardRepositoryError::persistence)?,
        table_rows: serde_json::from_value(table_rows)
            .map_err(TaskboardRepositoryError::persistence)?,
        active_tab,
        created_at,
        updated_at,
    };
    Ok(TaskboardRecord::from_persisted(data))
}

fn parse_active_tab(value: &str, form_type: FormType) -> TaskboardRepositoryResult<ShiftId> {
    let index: u8 = value
        .trim()
        .parse()
        .map_err(TaskboardRepositoryError::persistence)?;
    ShiftId::new(index, form_type).map_err(TaskboardRepositoryError::persistence)
}
