//! Input validation helpers
//!
//! Centralized text length and amount limits, plus the validation and
//! normalization functions the command handlers share.

use crate::error::{DomainError, DomainResult};

// ── Text length limits ──────────────────────────────────────────────

/// Participant and restaurant names
pub const MAX_NAME_LEN: usize = 200;

/// Notes, food/drink descriptions, void reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Menu document references
pub const MAX_URL_LEN: usize = 2048;

// ── Amount limits ───────────────────────────────────────────────────

/// Maximum allowed monetary figure (per order line or shared cost)
pub const MAX_AMOUNT: f64 = 1_000_000.0;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(DomainError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> DomainResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(DomainError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a monetary figure is finite, non-negative, and within range.
pub fn validate_amount(value: f64, field: &str) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(DomainError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"
        )));
    }
    Ok(())
}

/// Validate an optional monetary figure, if present.
pub fn validate_optional_amount(value: Option<f64>, field: &str) -> DomainResult<()> {
    if let Some(v) = value {
        validate_amount(v, field)?;
    }
    Ok(())
}

/// Trim an optional free-text field; blank collapses to absent.
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
