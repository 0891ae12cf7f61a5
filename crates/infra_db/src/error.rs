//! Database error types and port error translation
//!
//! PostgreSQL failures are captured as [`DatabaseError`] inside this crate
//! and translated into the shared [`PortError`] taxonomy at the repository
//! boundary, so callers see the same errors the other storage modules raise.
//!
//! The schema's unique and foreign-key constraints are a backstop behind the
//! checks the repositories perform in-process. When one fires anyway, the
//! repository maps it at the call site, where the statement's intent is
//! known: a unique violation on add/update becomes `Conflict`, a foreign-key
//! violation on a movie write becomes a `Validation` violation naming the
//! referencing field, and a foreign-key violation on a director delete
//! becomes `Integrity`.

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Applying the embedded migrations failed
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

/// PostgreSQL error code for unique_violation
pub(crate) const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL error code for foreign_key_violation
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";

/// True when the error is a PostgreSQL constraint violation with the given
/// code, optionally narrowed to one constraint name
pub(crate) fn is_pg_violation(error: &sqlx::Error, code: &str, constraint: Option<&str>) -> bool {
    match error {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(code)
                && constraint.map_or(true, |name| db_err.constraint() == Some(name))
        }
        _ => false,
    }
}

/// Fallback translation for SQLx errors no call-site mapping claimed
pub(crate) fn port_error_from_sqlx(error: sqlx::Error) -> PortError {
    match &error {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => PortError::Connection {
            message: error.to_string(),
            source: Some(Box::new(error)),
        },
        _ => PortError::Internal {
            message: error.to_string(),
            source: Some(Box::new(error)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_internal() {
        let error = port_error_from_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(error, PortError::Internal { .. }));
    }

    #[test]
    fn test_row_not_found_is_not_a_violation() {
        assert!(!is_pg_violation(
            &sqlx::Error::RowNotFound,
            UNIQUE_VIOLATION,
            None
        ));
    }

    #[test]
    fn test_database_error_display() {
        let error = DatabaseError::ConnectionFailed("refused".to_string());
        assert!(error.to_string().contains("refused"));
    }
}
