//! Domain model for taskboard records.
//!
//! The taskboard domain models the per-shift checklist form an operator
//! fills in during a turn: turn metadata, declaratively-scheduled task
//! values, ad-hoc processing rows, and the sign-off gate, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod form;
mod ids;
mod processing;
mod record;
mod schedule;
mod signoff;
mod turn;

pub use error::{ParseFormTypeError, SignOffError, TaskboardDomainError};
pub use form::{FormDate, FormType};
pub use ids::{LogEntryId, ShiftId, UserId};
pub use processing::{PersistedLogEntryData, ProcessingLogEntry, ProcessingRow};
pub use record::{PersistedTaskboardData, RecordKey, TaskValues, TaskboardRecord, TurnMap};
pub use schedule::{TaskDefinition, TaskKind, TaskSchedule, TaskValue};
pub use signoff::SignOff;
pub use turn::TurnEntry;
