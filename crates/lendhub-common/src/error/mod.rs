//! Error types shared across layers

mod app_error;

pub use app_error::{AppError, AppResult, AuthError, ErrorResponse};
