//! Repository port contracts
//!
//! This module provides the foundational types for the ports-and-adapters
//! split between the catalogue domain and its storage back-ends. Each entity
//! defines a repository port trait in the domain crate; storage modules
//! implement those traits as adapters.
//!
//! # Error contract
//!
//! All port implementations report failures through [`PortError`], ensuring
//! callers observe identical behaviour regardless of which storage module is
//! active:
//!
//! - `NotFound` and `Validation` are raised by the storage layer and
//!   propagate unchanged through the domain services.
//! - `Conflict` and `Integrity` are raised by the domain services when a
//!   cross-entity invariant would be violated, so callers can distinguish
//!   "bad input" from "business rule rejection".

use std::fmt;
use thiserror::Error;

/// A single violated field constraint, reported by entity validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// The entity field that failed validation
    pub field: &'static str,
    /// Human-readable description of the violated constraint
    pub message: String,
}

impl ConstraintViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn fmt_violations(violations: &[ConstraintViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error type for repository port operations
///
/// Provides a unified error type that all port implementations must use.
/// Storage-level errors (`NotFound`, `Validation`, `Connection`, `Internal`)
/// and service-level invariant rejections (`Conflict`, `Integrity`) share
/// this type so the caller handles one taxonomy.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The entity failed field-level validation; every violated constraint
    /// is listed
    #[error("Validation failed: {}", fmt_violations(.violations))]
    Validation {
        violations: Vec<ConstraintViolation>,
    },

    /// A uniqueness invariant would be violated
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// A delete would orphan dependent records
    #[error("Integrity violation: {message}")]
    Integrity { message: String },

    /// Connection to the underlying storage failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal storage error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        PortError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a Validation error from a list of violated constraints
    pub fn validation(violations: Vec<ConstraintViolation>) -> Self {
        PortError::Validation { violations }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Integrity error
    pub fn integrity(message: impl Into<String>) -> Self {
        PortError::Integrity {
            message: message.into(),
        }
    }

    /// Creates a Connection error without a source
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error without a source
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error is a field-level validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, PortError::Validation { .. })
    }

    /// Returns true if this error is a uniqueness rejection
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }

    /// Returns true if this error is a delete-time dependency rejection
    pub fn is_integrity(&self) -> bool {
        matches!(self, PortError::Integrity { .. })
    }
}

/// Marker trait for all repository port implementations
///
/// Port traits extend this marker to ensure implementations are thread-safe
/// and usable behind `Arc<dyn ...>` in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = PortError::not_found("Director", 123);
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Director"));
        assert!(error.to_string().contains("123"));
    }

    #[test]
    fn test_validation_lists_every_violation() {
        let error = PortError::validation(vec![
            ConstraintViolation::new("name", "must not be empty"),
            ConstraintViolation::new("birth_year", "must be 1800 or later"),
        ]);
        assert!(error.is_validation());
        let message = error.to_string();
        assert!(message.contains("name: must not be empty"));
        assert!(message.contains("birth_year: must be 1800 or later"));
    }

    #[test]
    fn test_invariant_rejections_are_distinct() {
        let conflict = PortError::conflict("already catalogued");
        let integrity = PortError::integrity("movies still reference it");
        assert!(conflict.is_conflict());
        assert!(!conflict.is_integrity());
        assert!(integrity.is_integrity());
        assert!(!integrity.is_validation());
    }
}
