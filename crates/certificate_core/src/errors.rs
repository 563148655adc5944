//! Certificate error types.
//!
//! Domain-specific errors for building certificate records and handing
//! them to a storage capability.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Input validation errors.
///
/// These errors describe malformed caller input. They are terminal: the
/// builder never retries and never produces a partial record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyInput { field: String },

    #[error("Field '{field}' is too long: {actual} characters (limit: {max}, exclusive)")]
    TooLong {
        field: String,
        actual: usize,
        max: usize,
    },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid limit for '{field}': {reason}")]
    InvalidLimit { field: String, reason: String },
}

impl ValidationError {
    /// Create an EmptyInput error
    pub fn empty_input(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }

    /// Create a TooLong error
    pub fn too_long(field: impl Into<String>, actual: usize, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            actual,
            max,
        }
    }

    /// Create an InvalidDate error carrying the raw, unparsed value
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Create an InvalidLimit error
    pub fn invalid_limit(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLimit {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the input field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyInput { field }
            | Self::TooLong { field, .. }
            | Self::InvalidLimit { field, .. } => field.as_str(),
            Self::InvalidDate { .. } => crate::issue_date::DATE_FIELD,
        }
    }
}

/// Errors reported by a [`CertificateStore`](crate::CertificateStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Storage rejected the certificate: {reason}")]
    Rejected { reason: String },
}

/// Top-level error for issuing a certificate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificateError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for certificate operations.
pub type CertificateResult<T> = Result<T, CertificateError>;
