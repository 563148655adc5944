//! Text normalization shared by the free-text certificate fields.

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

/// Trim `raw` and check it against an exclusive maximum length.
///
/// Length is counted in characters. A trimmed value whose length equals
/// `max` is rejected.
///
/// # Errors
/// - `ValidationError::EmptyInput` if nothing is left after trimming
/// - `ValidationError::TooLong` if the trimmed length is `>= max`
pub(crate) fn trim_bounded<'a>(
    field: &str,
    raw: &'a str,
    max: usize,
) -> Result<&'a str, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::empty_input(field));
    }

    let len = trimmed.chars().count();
    if len >= max {
        return Err(ValidationError::too_long(field, len, max));
    }

    Ok(trimmed)
}

/// Uppercase `value` one character at a time using the Unicode simple
/// uppercase mapping.
///
/// Characters with no simple mapping (`ß`, `ŉ`, ligatures such as `ﬁ`) are
/// kept as they are, so the output always has the same character count as
/// the input.
pub(crate) fn simple_uppercase(value: &str) -> String {
    value.chars().map(simple_uppercase_char).collect()
}

fn simple_uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => simple_uppercase_special(c).unwrap_or(c),
    }
}

// Characters whose full uppercase expands to several characters but which
// still have a one-character simple uppercase: the Greek vowels with
// ypogegrammeni map to their prosgegrammeni capitals.
fn simple_uppercase_special(c: char) -> Option<char> {
    let shifted = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            c as u32 + 8
        }
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => c as u32 + 9,
        _ => return None,
    };
    char::from_u32(shifted)
}

/// Whether `value` ends with `suffix`, ignoring ASCII case.
pub(crate) fn ends_with_ignore_ascii_case(value: &str, suffix: &str) -> bool {
    if value.len() < suffix.len() {
        return false;
    }

    let start = value.len() - suffix.len();
    value.is_char_boundary(start) && value[start..].eq_ignore_ascii_case(suffix)
}
