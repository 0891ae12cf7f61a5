//! Custom Test Assertions
//!
//! Assertion helpers for the port error taxonomy that give more meaningful
//! failure messages than standard assertions.

use core_kernel::PortError;

/// Asserts the error is a validation failure naming the given field
///
/// # Panics
///
/// Panics when the error is a different variant or no violation touches the
/// field.
pub fn assert_violates_field(error: &PortError, field: &str) {
    match error {
        PortError::Validation { violations } => {
            assert!(
                violations.iter().any(|v| v.field == field),
                "no violation for field '{}', got: {:?}",
                field,
                violations
            );
        }
        other => panic!("expected Validation error, got: {other}"),
    }
}

/// Asserts the error is `NotFound`
pub fn assert_not_found(error: &PortError) {
    assert!(error.is_not_found(), "expected NotFound, got: {error}");
}

/// Asserts the error is `Conflict`
pub fn assert_conflict(error: &PortError) {
    assert!(error.is_conflict(), "expected Conflict, got: {error}");
}

/// Asserts the error is `Integrity`
pub fn assert_integrity(error: &PortError) {
    assert!(error.is_integrity(), "expected Integrity, got: {error}");
}
