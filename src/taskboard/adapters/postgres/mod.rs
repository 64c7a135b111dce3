//! `PostgreSQL` adapters for taskboard and processing-log persistence.

mod models;
mod processing_log;
mod repository;
mod schema;

pub use processing_log::PostgresProcessingLog;
pub use repository::{PostgresTaskboardRepository, TaskboardPgPool};
