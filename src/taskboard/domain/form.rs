//! Form type and form date scalar types.

use super::{ParseFormTypeError, TaskboardDomainError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of taskboard form an operator works through during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    /// Normal working day, three shifts.
    DayNormal,
    /// Non-working day, single implicit shift.
    DayNonWorking,
    /// Month-end processing on a working day, three shifts.
    MonthEndNormal,
    /// Month-end processing on a non-working day, single implicit shift.
    MonthEndNonWorking,
}

impl FormType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DayNormal => "day_normal",
            Self::DayNonWorking => "day_nonworking",
            Self::MonthEndNormal => "month_end_normal",
            Self::MonthEndNonWorking => "month_end_nonworking",
        }
    }

    /// Returns the local-cache key prefix for this form type.
    #[must_use]
    pub const fn cache_prefix(self) -> &'static str {
        match self {
            Self::DayNormal => "taskboard-day",
            Self::DayNonWorking => "taskboard-day-nonworking",
            Self::MonthEndNormal => "taskboard-month-end",
            Self::MonthEndNonWorking => "taskboard-month-end-nonworking",
        }
    }

    /// Returns the number of shifts this form type carries.
    ///
    /// Non-working-day forms have a single implicit shift.
    #[must_use]
    pub const fn shift_count(self) -> u8 {
        match self {
            Self::DayNormal | Self::MonthEndNormal => 3,
            Self::DayNonWorking | Self::MonthEndNonWorking => 1,
        }
    }
}

impl TryFrom<&str> for FormType {
    type Error = ParseFormTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "day_normal" => Ok(Self::DayNormal),
            "day_nonworking" => Ok(Self::DayNonWorking),
            "month_end_normal" => Ok(Self::MonthEndNormal),
            "month_end_nonworking" => Ok(Self::MonthEndNonWorking),
            _ => Err(ParseFormTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar date keying a taskboard record.
///
/// Persisted as the `YYYY-MM-DD` string key, never as a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDate(NaiveDate);

impl FormDate {
    /// Wraps an already-validated calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a storage key of the form `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskboardDomainError::InvalidFormDate`] when the key does
    /// not parse as a calendar date.
    pub fn from_key(key: &str) -> Result<Self, TaskboardDomainError> {
        NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| TaskboardDomainError::InvalidFormDate(key.to_owned()))
    }

    /// Returns the `YYYY-MM-DD` storage key.
    #[must_use]
    pub fn storage_key(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for FormDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
