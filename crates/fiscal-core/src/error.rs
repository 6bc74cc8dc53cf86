//! # Error Hierarchy
//!
//! Structured error types for the fiscal identifier stack, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every constructor failure is a [`ValidationError`] carrying the rejected
//! input, so that a caller rejecting a form field or a stored row can report
//! exactly what was wrong with it.

use thiserror::Error;

/// Top-level error type for the fiscal identifier stack.
#[derive(Error, Debug)]
pub enum FiscalError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised by the [`Tin`](crate::Tin) and
/// [`FiscalSign`](crate::FiscalSign) constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value was required but none was supplied.
    #[error("{target} is required but no value was supplied")]
    NullArgument {
        /// Name of the type being constructed.
        target: &'static str,
    },

    /// The input is not an unsigned decimal numeral.
    #[error("malformed numeral for {target}: \"{value}\" ({reason})")]
    MalformedNumeral {
        /// Name of the type being constructed.
        target: &'static str,
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// TIN digit count is neither 10 nor 12 (or, for a prefix awaiting
    /// control digits, neither 9 nor 10).
    #[error("invalid TIN length: \"{value}\" has {length} digits (expected {expected})")]
    InvalidLength {
        /// The rejected input.
        value: String,
        /// Its digit count.
        length: usize,
        /// The accepted digit counts.
        expected: &'static str,
    },

    /// TIN control digit(s) do not match the weighted modulus-11 checksum.
    #[error("invalid checksum of {length}-digit TIN \"{value}\": expected control digits {expected}")]
    ChecksumMismatch {
        /// The rejected input.
        value: String,
        /// Its digit count (10 or 12).
        length: usize,
        /// The control digit(s) the checksum produces.
        expected: String,
    },

    /// A signed integer input was negative.
    #[error("TIN cannot be negative: {0}")]
    NegativeValue(i64),
}

/// Fieldless classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ValidationError::NullArgument`].
    NullArgument,
    /// See [`ValidationError::MalformedNumeral`].
    MalformedNumeral,
    /// See [`ValidationError::InvalidLength`].
    InvalidLength,
    /// See [`ValidationError::ChecksumMismatch`].
    ChecksumMismatch,
    /// See [`ValidationError::NegativeValue`].
    NegativeValue,
}

impl ValidationError {
    /// Classify this error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::MalformedNumeral { .. } => ErrorKind::MalformedNumeral,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            Self::NegativeValue(_) => ErrorKind::NegativeValue,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NullArgument => "null_argument",
            Self::MalformedNumeral => "malformed_numeral",
            Self::InvalidLength => "invalid_length",
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::NegativeValue => "negative_value",
        };
        f.write_str(name)
    }
}
