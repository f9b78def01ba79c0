//! Field rules shared by the request types
//!
//! Each helper records a failure into the caller's [`ValidationErrors`] and
//! returns the sanitized value, so one pass reports every bad field.

use crate::error::ValidationErrors;
use serde_json::Value;

/// Trimmed text of 1..=max characters
pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max: usize,
    message: &str,
) -> Option<String> {
    let trimmed = value.map(|v| v.trim().to_string()).unwrap_or_default();
    let len = trimmed.chars().count();
    if len == 0 || len > max {
        errors.push(field, message);
        None
    } else {
        Some(trimmed)
    }
}

/// Trimmed text of at most `max` characters. Blank input becomes `None`.
pub fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max: usize,
    message: &str,
) -> Option<String> {
    let trimmed = value.map(|v| v.trim().to_string())?;
    if trimmed.chars().count() > max {
        errors.push(field, message);
        return None;
    }
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Integer given as a JSON number or a numeric string
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Required integer field
pub fn required_integer(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&Value>,
    message: &str,
) -> Option<i64> {
    let parsed = value.and_then(integer);
    if parsed.is_none() {
        errors.push(field, message);
    }
    parsed
}

/// Optional integer field, bounded below by `min`
pub fn optional_integer(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&Value>,
    min: i64,
    message: &str,
) -> Option<i64> {
    let value = value.filter(|v| !v.is_null())?;
    match integer(value) {
        Some(n) if n >= min => Some(n),
        _ => {
            errors.push(field, message);
            None
        }
    }
}
