//! Error types for taskboard domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain taskboard values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskboardDomainError {
    /// The form date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid form date '{0}', expected YYYY-MM-DD")]
    InvalidFormDate(String),

    /// The shift index is outside the range the form type allows.
    #[error("invalid shift {shift} for form type with {available} shift(s)")]
    InvalidShift {
        /// Requested 1-based shift index.
        shift: u8,
        /// Number of shifts the form type carries.
        available: u8,
    },
}

/// Error returned while parsing form types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown form type: {0}")]
pub struct ParseFormTypeError(pub String);

/// Errors raised by the sign-off gate that blocks save/export actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignOffError {
    /// The signer name is empty after trimming.
    #[error("sign-off requires the signer name")]
    MissingSignerName,

    /// No signature image has been captured.
    #[error("sign-off requires a signature image")]
    MissingSignatureImage,
}
