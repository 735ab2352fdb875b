//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Store-level failures are classified into these variants by the infrastructure
/// crates from structured driver errors, so callers match on the variant and never
/// on message text.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("no {0} found")]
    NoResults(&'static str),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("invalid {0} id")]
    InvalidId(&'static str),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("cannot modify admin account")]
    ProtectedAccount,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("{0} already exists")]
    Duplicate(&'static str),

    #[error("{0} id not found")]
    DanglingReference(&'static str),

    #[error("{0} is still in use")]
    StillReferenced(&'static str),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("lending is not eligible for payment")]
    NotPayable,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::NoResults(_) => "NO_RESULTS",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidId(_) => "INVALID_ID",
            Self::ProtectedAccount => "PROTECTED_ACCOUNT",
            Self::Duplicate(_) => "DUPLICATE",
            Self::DanglingReference(_) => "DANGLING_REFERENCE",
            Self::StillReferenced(_) => "STILL_REFERENCED",
            Self::NotPayable => "NOT_PAYABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NoResults(_) | Self::NotPayable)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidId(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::ProtectedAccount)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::Duplicate(_) | Self::DanglingReference(_) | Self::StillReferenced(_)
        )
    }
}
