//! Error handling utilities for repositories
//!
//! Constraint failures are classified from the driver's structured error
//! (`is_unique_violation`, `is_foreign_key_violation`), never from message text.

use lendhub_core::error::DomainError;
use sqlx::postgres::PgQueryResult;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    map_db_error(e)
}

/// Classify an insert/update failure that may hit either a unique or a
/// foreign key constraint
pub fn map_write_error(
    e: SqlxError,
    duplicate: &'static str,
    reference: &'static str,
) -> DomainError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => DomainError::Duplicate(duplicate),
        Some(db_err) if db_err.is_foreign_key_violation() => {
            DomainError::DanglingReference(reference)
        }
        _ => map_db_error(e),
    }
}

/// Turn a zero-row write into `NotFound`
pub fn expect_row(result: PgQueryResult, entity: &'static str) -> Result<(), DomainError> {
    if result.rows_affected() == 0 {
        Err(DomainError::NotFound(entity))
    } else {
        Ok(())
    }
}

/// Build an `ILIKE` pattern matching `query` anywhere, with wildcards escaped
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
