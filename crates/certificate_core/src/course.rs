//! Course name domain type

use serde::Serialize;

use crate::errors::ValidationError;
use crate::text::{ends_with_ignore_ascii_case, simple_uppercase, trim_bounded};

#[cfg(test)]
#[path = "course_tests.rs"]
mod tests;

/// Field name reported in course validation errors.
pub const COURSE_FIELD: &str = "course";

const COURSE_SUFFIX: &str = "course";

/// Validated, normalized course name
///
/// Always uppercase and always ends with `COURSE`. When the input lacks the
/// word it is appended as `" COURSE"`.
///
/// # Examples
///
/// ```
/// use certificate_core::CourseName;
///
/// let course = CourseName::new("Go", 20).unwrap();
/// assert_eq!(course.as_str(), "GO COURSE");
///
/// let course = CourseName::new("Security Course", 20).unwrap();
/// assert_eq!(course.as_str(), "SECURITY COURSE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseName(String);

impl CourseName {
    /// Create a new course name with validation
    ///
    /// # Validation Rules
    /// - Surrounding whitespace is trimmed first
    /// - Length: at least 1 and strictly less than `max_len` characters
    /// - The bound is checked before the suffix is appended, so the stored
    ///   name may be longer than `max_len`
    ///
    /// The suffix check ignores case and matches any trailing `course`,
    /// which includes words such as `Discourse`.
    ///
    /// # Errors
    /// Returns `ValidationError` if validation fails
    pub fn new(raw: &str, max_len: usize) -> Result<Self, ValidationError> {
        let trimmed = trim_bounded(COURSE_FIELD, raw, max_len)?;

        let course = if ends_with_ignore_ascii_case(trimmed, COURSE_SUFFIX) {
            simple_uppercase(trimmed)
        } else {
            simple_uppercase(&format!("{trimmed} {COURSE_SUFFIX}"))
        };

        Ok(Self(course))
    }

    /// Get the course name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
