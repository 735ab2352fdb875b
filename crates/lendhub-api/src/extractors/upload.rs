//! Multipart file upload extractor

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};

use crate::response::ApiError;

/// Name of the multipart field carrying the file
pub const FILE_FIELD: &str = "file";

/// Largest accepted upload body
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// The `file` part of a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for UploadedFile {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let file_name = field
                .file_name()
                .filter(|name| !name.is_empty())
                .unwrap_or("upload")
                .to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;

            if bytes.is_empty() {
                return Err(ApiError::bad_request("file is empty"));
            }

            return Ok(Self {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            });
        }

        Err(ApiError::bad_request("file is required"))
    }
}
