//! Input validation utilities
//!
//! Presence checks only; the service imposes no format rules beyond
//! non-emptiness.

/// Check that a required field is present and non-empty
pub fn require(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} is required"));
    }

    Ok(())
}
