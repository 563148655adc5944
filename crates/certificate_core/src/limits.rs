//! Field length limits.
//!
//! The limits are exclusive upper bounds: a trimmed input whose length
//! equals the limit is rejected.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "limits_tests.rs"]
mod tests;

/// Default exclusive maximum length of a course name.
pub const DEFAULT_MAX_COURSE_LEN: usize = 20;

/// Default exclusive maximum length of a recipient name.
pub const DEFAULT_MAX_NAME_LEN: usize = 30;

/// Configured maximum lengths for the free-text certificate fields.
///
/// Lengths are counted in characters of the trimmed input. The bound is
/// exclusive, so the default course limit of 20 accepts at most 19
/// characters. This is a known quirk that callers rely on.
///
/// # Examples
///
/// ```
/// use certificate_core::FieldLimits;
///
/// let limits = FieldLimits::default();
/// assert_eq!(limits.max_course_len, 20);
/// assert_eq!(limits.max_name_len, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    /// Exclusive maximum length of the trimmed course name
    pub max_course_len: usize,

    /// Exclusive maximum length of the trimmed recipient name
    pub max_name_len: usize,
}

impl FieldLimits {
    /// Create limits with explicit maxima.
    pub fn new(max_course_len: usize, max_name_len: usize) -> Self {
        Self {
            max_course_len,
            max_name_len,
        }
    }

    /// Check that both limits can accept at least one character.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidLimit` if a limit is zero or one,
    /// since an exclusive bound of either value rejects every non-empty input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_course_len < 2 {
            return Err(ValidationError::invalid_limit(
                "max_course_len",
                format!("must be at least 2, got {}", self.max_course_len),
            ));
        }

        if self.max_name_len < 2 {
            return Err(ValidationError::invalid_limit(
                "max_name_len",
                format!("must be at least 2, got {}", self.max_name_len),
            ));
        }

        Ok(())
    }
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COURSE_LEN, DEFAULT_MAX_NAME_LEN)
    }
}
