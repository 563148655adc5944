//! Recipient name domain type

use serde::Serialize;

use crate::errors::ValidationError;
use crate::text::{simple_uppercase, trim_bounded};

#[cfg(test)]
#[path = "recipient_tests.rs"]
mod tests;

/// Field name reported in recipient validation errors.
pub const NAME_FIELD: &str = "name";

/// Validated, normalized name of the certificate recipient
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecipientName(String);

impl RecipientName {
    /// Create a new recipient name with validation
    ///
    /// # Validation Rules
    /// - Surrounding whitespace is trimmed first
    /// - Length: at least 1 and strictly less than `max_len` characters
    ///
    /// # Errors
    /// Returns `ValidationError` if validation fails
    pub fn new(raw: &str, max_len: usize) -> Result<Self, ValidationError> {
        let trimmed = trim_bounded(NAME_FIELD, raw, max_len)?;
        Ok(Self(simple_uppercase(trimmed)))
    }

    /// Get the recipient name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecipientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
