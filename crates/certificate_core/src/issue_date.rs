//! Certificate date domain type
//!
//! The input format is fixed to `YYYY-MM-DD` and the display format to
//! `DD/MM/YYYY`. Neither carries a time of day or a timezone.

use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "issue_date_tests.rs"]
mod tests;

/// Field name reported for date validation errors.
pub const DATE_FIELD: &str = "date";

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Calendar date printed on a certificate
///
/// # Examples
///
/// ```
/// use certificate_core::IssueDate;
///
/// let date = IssueDate::parse("2021-05-17").unwrap();
/// assert_eq!(date.to_string(), "17/05/2021");
///
/// assert!(IssueDate::parse("17-05-2021").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IssueDate(NaiveDate);

impl IssueDate {
    /// Parse a date in the strict `YYYY-MM-DD` format
    ///
    /// # Validation Rules
    /// - Exactly ten characters, no surrounding whitespace
    /// - Four digit year, two digit month and two digit day, separated by `-`
    /// - Month and day must form a real calendar date
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidDate` carrying the raw input
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !has_strict_shape(raw) {
            return Err(ValidationError::invalid_date(raw));
        }

        NaiveDate::parse_from_str(raw, INPUT_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::invalid_date(raw))
    }

    /// Get the underlying calendar date
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

// chrono accepts single digit months and days as well as signed years, so
// the fixed-width shape is checked up front.
fn has_strict_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl std::fmt::Display for IssueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for IssueDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<IssueDate> for NaiveDate {
    fn from(date: IssueDate) -> NaiveDate {
        date.0
    }
}
