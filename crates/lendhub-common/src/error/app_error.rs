//! Application error types
//!
//! Unified error handling for the entire application.

use lendhub_core::DomainError;
use serde::{Deserialize, Serialize};

/// Authentication and authorization failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid token signature")]
    InvalidSignature,

    #[error("malformed token")]
    Malformed,

    #[error("token expired")]
    Expired,

    #[error("missing authentication")]
    Missing,

    #[error("insufficient permissions")]
    Forbidden,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("invalid refresh token")]
    InvalidRefreshToken,
}

impl AuthError {
    #[must_use]
    pub fn status_code(self) -> u16 {
        match self {
            Self::Forbidden => 403,
            _ => 401,
        }
    }

    #[must_use]
    pub fn error_code(self) -> &'static str {
        match self {
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::Malformed => "MALFORMED_TOKEN",
            Self::Expired => "TOKEN_EXPIRED",
            Self::Missing => "MISSING_AUTH",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
        }
    }
}

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Auth(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Database(_)
            | Self::Cache(_)
            | Self::ExternalService(_)
            | Self::Internal(_)
            | Self::Config(_) => 500,
            Self::Domain(e) => Self::status_code_for(e),
        }
    }

    /// HTTP status code for a domain error
    #[must_use]
    pub fn status_code_for(e: &DomainError) -> u16 {
        if e.is_not_found() {
            404
        } else if e.is_authorization() {
            403
        } else if e.is_validation() {
            400
        } else if e.is_conflict() {
            409
        } else {
            500
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Auth(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl std::fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error body returned to API clients: `{"error": ["reason", ...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Vec<String>,
}

impl ErrorResponse {
    /// Message used for every 5xx response
    pub const INTERNAL_MESSAGE: &'static str = "internal server error";

    pub fn new(messages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            error: messages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            error: vec![message.into()],
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        if err.is_server_error() {
            Self::single(Self::INTERNAL_MESSAGE)
        } else {
            Self::single(err.to_string())
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
