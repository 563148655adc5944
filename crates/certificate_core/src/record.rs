//! Certificate record and the builder that produces it.
//!
//! A [`CertificateRecord`] is created in one step from three raw strings.
//! Either every field validates and the record is returned complete, or the
//! first failure (course, then name, then date) is returned and nothing is
//! built.

use serde::Serialize;
use tracing::{debug, warn};

use crate::course::CourseName;
use crate::errors::ValidationError;
use crate::issue_date::IssueDate;
use crate::limits::FieldLimits;
use crate::recipient::RecipientName;

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

/// Heading printed on every certificate.
pub const COMPLETION_LABEL: &str = "Certification of Completion";

/// Line printed above the recipient name.
pub const PRESENTED_LABEL: &str = "This Certificate is Presented To";

/// Display strings derived from the validated certificate fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateLabels {
    title: String,
    completion: String,
    presented: String,
    participation: String,
    date: String,
}

impl CertificateLabels {
    fn derive(course: &CourseName, name: &RecipientName, date: &IssueDate) -> Self {
        Self {
            title: format!("{course} Certificate - {name}"),
            completion: COMPLETION_LABEL.to_string(),
            presented: PRESENTED_LABEL.to_string(),
            participation: format!("For participation in the {course}"),
            date: format!("Date: {date}"),
        }
    }

    /// `"<course> Certificate - <name>"`
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Always [`COMPLETION_LABEL`]
    pub fn completion(&self) -> &str {
        &self.completion
    }

    /// Always [`PRESENTED_LABEL`]
    pub fn presented(&self) -> &str {
        &self.presented
    }

    /// `"For participation in the <course>"`
    pub fn participation(&self) -> &str {
        &self.participation
    }

    /// `"Date: DD/MM/YYYY"`
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Immutable, validated certificate data ready to be rendered or stored.
///
/// Records can only be obtained from [`CertificateBuilder::build`] or the
/// [`build`] shortcut.
///
/// # Examples
///
/// ```
/// use certificate_core::build;
///
/// let record = build("Go", "Ada Lovelace", "2021-05-17").unwrap();
///
/// assert_eq!(record.course().as_str(), "GO COURSE");
/// assert_eq!(record.name().as_str(), "ADA LOVELACE");
/// assert_eq!(record.labels().title(), "GO COURSE Certificate - ADA LOVELACE");
/// assert_eq!(record.labels().date(), "Date: 17/05/2021");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateRecord {
    course: CourseName,
    name: RecipientName,
    date: IssueDate,
    labels: CertificateLabels,
}

impl CertificateRecord {
    /// Normalized course name, always ending in `COURSE`
    pub fn course(&self) -> &CourseName {
        &self.course
    }

    /// Normalized recipient name
    pub fn name(&self) -> &RecipientName {
        &self.name
    }

    /// Date printed on the certificate
    pub fn date(&self) -> IssueDate {
        self.date
    }

    /// Pre-formatted display strings
    pub fn labels(&self) -> &CertificateLabels {
        &self.labels
    }
}

/// Validates raw input against a set of [`FieldLimits`] and builds records.
///
/// The builder holds no state besides its limits, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificateBuilder {
    limits: FieldLimits,
}

impl CertificateBuilder {
    /// Creates a builder without checking the limits.
    ///
    /// Limits below 2 make every build fail; use [`Self::try_new`] for limits
    /// that come from outside the program.
    pub fn new(limits: FieldLimits) -> Self {
        Self { limits }
    }

    /// Creates a builder after validating the limits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLimit` if either limit cannot accept
    /// any input.
    pub fn try_new(limits: FieldLimits) -> Result<Self, ValidationError> {
        limits.validate()?;
        Ok(Self::new(limits))
    }

    /// The limits this builder validates against.
    pub fn limits(&self) -> FieldLimits {
        self.limits
    }

    /// Validates the three raw inputs and assembles a record.
    ///
    /// # Arguments
    ///
    /// * `course` - Course name; trimmed, bounded, suffixed with `" course"`
    ///   if needed, then uppercased
    /// * `name` - Recipient name; trimmed, bounded, then uppercased
    /// * `date` - Date in strict `YYYY-MM-DD` format
    ///
    /// # Errors
    ///
    /// Returns the first failure in the order course, name, date:
    /// - `ValidationError::EmptyInput` for empty or whitespace-only text
    /// - `ValidationError::TooLong` when the trimmed text is as long as the
    ///   limit or longer
    /// - `ValidationError::InvalidDate` when the date does not parse
    pub fn build(
        &self,
        course: &str,
        name: &str,
        date: &str,
    ) -> Result<CertificateRecord, ValidationError> {
        debug!(
            course_len = course.len(),
            name_len = name.len(),
            date_len = date.len(),
            "Building certificate record"
        );

        let record = self.validate(course, name, date).inspect_err(|e| {
            warn!(field = e.field(), error = %e, "Certificate input rejected");
        })?;

        debug!(
            course = %record.course,
            name = %record.name,
            date = %record.date,
            "Certificate record built"
        );

        Ok(record)
    }

    fn validate(
        &self,
        course: &str,
        name: &str,
        date: &str,
    ) -> Result<CertificateRecord, ValidationError> {
        let course = CourseName::new(course, self.limits.max_course_len)?;
        let name = RecipientName::new(name, self.limits.max_name_len)?;
        let date = IssueDate::parse(date)?;
        let labels = CertificateLabels::derive(&course, &name, &date);

        Ok(CertificateRecord {
            course,
            name,
            date,
            labels,
        })
    }
}

/// Builds a record using the default [`FieldLimits`].
///
/// Shortcut for `CertificateBuilder::default().build(course, name, date)`.
///
/// # Errors
///
/// See [`CertificateBuilder::build`].
pub fn build(course: &str, name: &str, date: &str) -> Result<CertificateRecord, ValidationError> {
    CertificateBuilder::default().build(course, name, date)
}
