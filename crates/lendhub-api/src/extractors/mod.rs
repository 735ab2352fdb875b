//! Axum extractors for request handling
//!
//! Custom extractors for identity, validation, query parameters and uploads.

mod auth;
mod query;
mod upload;
mod validated;

pub use auth::AuthUser;
pub use query::{FileNameQuery, IdQuery, SearchQuery};
pub use upload::{UploadedFile, FILE_FIELD, MAX_UPLOAD_BYTES};
pub use validated::ValidatedJson;
