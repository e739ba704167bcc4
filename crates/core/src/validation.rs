//! Shared field validation helpers.
//!
//! Only presence and maximum-length checks are performed. Lengths are
//! counted in characters so multi-byte addresses are measured the way a
//! user sees them.

use crate::error::CoreError;

/// Trim `value` and reject it when nothing is left.
///
/// `message` is returned verbatim as the validation failure.
pub fn require_text(value: &str, message: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Reject `value` when it is longer than `max` characters.
pub fn validate_max_chars(value: &str, max: usize, label: &str) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{label} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Unwrap a required selection, failing with `message` when absent.
pub fn require_selection<T>(value: Option<T>, message: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(message.to_string()))
}
