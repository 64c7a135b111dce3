//! Error types for PS2 batch validation.

use thiserror::Error;

/// Errors returned while validating and encoding a PS2 batch.
///
/// Row-level variants carry the 1-based index of the failing entry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Ps2EncodeError {
    /// The company account is not exactly 21 digits.
    #[error("company account must be exactly 21 digits")]
    InvalidCompanyAccount,

    /// The processing date is not exactly 8 digits.
    #[error("processing date must be exactly 8 digits (YYYYMMDD)")]
    InvalidProcessingDate,

    /// The sender reference is empty after trimming.
    #[error("sender reference must not be empty")]
    MissingReference,

    /// An entry's account number is not exactly 21 digits.
    #[error("entry {row}: account number must be exactly 21 digits")]
    InvalidAccountNumber {
        /// 1-based index of the failing entry.
        row: usize,
    },

    /// A detail record did not serialize to exactly 80 characters.
    ///
    /// Triggers when an amount is wider than its zero-padded field.
    #[error("entry {row}: detail record is {length} characters, expected 80")]
    RecordLengthMismatch {
        /// 1-based index of the failing entry.
        row: usize,
        /// Actual serialized length.
        length: usize,
    },
}
