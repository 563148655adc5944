//! # Certificate Core
//!
//! This crate turns three user-supplied strings (a course name, a recipient
//! name and a date) into an immutable [`CertificateRecord`] holding the
//! normalized values and the display labels used to render a certificate.
//!
//! ## Overview
//!
//! Building a record runs these steps and stops at the first failure:
//! 1. Course: trim, bound check, append `" course"` if missing, uppercase
//! 2. Name: trim, bound check, uppercase
//! 3. Date: strict `YYYY-MM-DD` parse
//! 4. Label derivation from the normalized values
//!
//! Length limits are exclusive: with the default course limit of 20, a
//! 20 character course name is rejected. See [`FieldLimits`].
//!
//! ## Examples
//!
//! ```
//! use certificate_core::{build, ValidationError};
//!
//! let record = build("Go", "Ada Lovelace", "2021-05-17").unwrap();
//! assert_eq!(record.labels().title(), "GO COURSE Certificate - ADA LOVELACE");
//! assert_eq!(record.labels().date(), "Date: 17/05/2021");
//!
//! let err = build("Go", "Ada", "17-05-2021").unwrap_err();
//! assert!(matches!(err, ValidationError::InvalidDate { .. }));
//! ```
//!
//! ## Architecture
//!
//! The crate only validates and formats. Persisting a record is delegated to
//! a caller-provided [`CertificateStore`]; [`issue_certificate`] combines the
//! two steps.

mod errors;

// Re-export error types for public API
pub use errors::{CertificateError, CertificateResult, StorageError, ValidationError};

/// Course name domain type (CourseName)
pub mod course;

/// Recipient name domain type (RecipientName)
pub mod recipient;

/// Certificate date domain type (IssueDate)
pub mod issue_date;

/// Configured length limits (FieldLimits)
pub mod limits;

/// Record assembly (CertificateRecord, CertificateBuilder)
pub mod record;

/// Caller-provided persistence (CertificateStore)
pub mod storage;

mod text;

// Re-export commonly used types
pub use course::CourseName;
pub use issue_date::IssueDate;
pub use limits::{FieldLimits, DEFAULT_MAX_COURSE_LEN, DEFAULT_MAX_NAME_LEN};
pub use recipient::RecipientName;
pub use record::{
    build, CertificateBuilder, CertificateLabels, CertificateRecord, COMPLETION_LABEL,
    PRESENTED_LABEL,
};
pub use storage::{issue_certificate, CertificateStore};
