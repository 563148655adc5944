//! Storage capability for certificate records.
//!
//! This crate does not persist anything itself. Callers provide a
//! [`CertificateStore`] for whatever medium they use (a file, a remote
//! service, a printer queue) and the core hands it finished records.
//!
//! # Examples
//!
//! ```no_run
//! use async_trait::async_trait;
//! use certificate_core::{
//!     issue_certificate, CertificateBuilder, CertificateRecord, CertificateStore, StorageError,
//! };
//!
//! struct StdoutStore;
//!
//! #[async_trait]
//! impl CertificateStore for StdoutStore {
//!     async fn save(&self, record: &CertificateRecord) -> Result<(), StorageError> {
//!         println!("{}", record.labels().title());
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let builder = CertificateBuilder::default();
//! let record = issue_certificate(&builder, &StdoutStore, "Go", "Ada", "2021-05-17").await?;
//! println!("issued {}", record.labels().title());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use tracing::{error, info};

use crate::errors::{CertificateResult, StorageError};
use crate::record::{CertificateBuilder, CertificateRecord};

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;

/// Persists certificate records to a caller-chosen medium.
///
/// Implementations decide what "saved" means for their medium. The core
/// only requires that a failed save is reported as a [`StorageError`].
#[async_trait]
pub trait CertificateStore: Send + Sync {
    /// Store one validated record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot accept the record.
    async fn save(&self, record: &CertificateRecord) -> Result<(), StorageError>;
}

/// Builds a record and hands it to `store`.
///
/// # Returns
///
/// The stored record, so callers can go on to render it.
///
/// # Errors
///
/// - `CertificateError::Validation` if the input is rejected. The store is
///   not called in that case.
/// - `CertificateError::Storage` with the store's own error if saving fails.
pub async fn issue_certificate(
    builder: &CertificateBuilder,
    store: &dyn CertificateStore,
    course: &str,
    name: &str,
    date: &str,
) -> CertificateResult<CertificateRecord> {
    let record = builder.build(course, name, date)?;

    info!(course = %record.course(), name = %record.name(), "Saving certificate");

    match store.save(&record).await {
        Ok(()) => {
            info!(course = %record.course(), "Certificate saved");
            Ok(record)
        }
        Err(e) => {
            error!(course = %record.course(), error = %e, "Failed to save certificate");
            Err(e.into())
        }
    }
}
