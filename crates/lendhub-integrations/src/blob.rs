//! Blob store client
//!
//! Uploads go to `POST {base}/file` as multipart with the original name in a
//! `File-Name` header; the store answers with the name it kept.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::instrument;

use lendhub_common::BlobConfig;
use lendhub_core::traits::{BlobStore, RepoResult};

use crate::error::{IntegrationError, IntegrationResult};
use crate::http::join_url;

const SERVICE: &str = "blob store";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    filename: String,
}

/// HTTP implementation of `BlobStore`
#[derive(Clone)]
pub struct HttpBlobStore {
    client: reqwest::Client,
    base_url: String,
    authorization: String,
}

impl HttpBlobStore {
    pub fn new(client: reqwest::Client, config: &BlobConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            authorization: config.authorization.clone(),
        }
    }

    async fn send_upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> IntegrationResult<String> {
        let mut part = Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(content_type) = content_type {
            part = part
                .mime_str(content_type)
                .map_err(IntegrationError::transport(SERVICE))?;
        }

        let response = self
            .client
            .post(join_url(&self.base_url, "file"))
            .header("File-Name", file_name)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .multipart(Form::new().part("file", part))
            .send()
            .await
            .map_err(IntegrationError::transport(SERVICE))?;

        if response.status() != StatusCode::OK {
            return Err(IntegrationError::from_response(SERVICE, response).await);
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(IntegrationError::decode(SERVICE))?;
        Ok(body.filename)
    }

    async fn send_delete(&self, file_name: &str) -> IntegrationResult<()> {
        let response = self
            .client
            .delete(join_url(&self.base_url, &format!("file/{file_name}")))
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .send()
            .await
            .map_err(IntegrationError::transport(SERVICE))?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            StatusCode::NOT_FOUND => {
                tracing::debug!(file_name, "Blob already gone");
                Ok(())
            }
            _ => Err(IntegrationError::from_response(SERVICE, response).await),
        }
    }
}

impl std::fmt::Debug for HttpBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBlobStore")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> RepoResult<String> {
        Ok(self.send_upload(file_name, content_type, bytes).await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, file_name: &str) -> RepoResult<()> {
        Ok(self.send_delete(file_name).await?)
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::{delete, post};
    use axum::{Json, Router};
    use lendhub_common::HttpClientConfig;
    use lendhub_core::DomainError;

    use super::*;
    use crate::http::build_client;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    fn store(base_url: String) -> HttpBlobStore {
        let client = build_client(&HttpClientConfig::default()).unwrap();
        HttpBlobStore::new(
            client,
            &BlobConfig {
                base_url,
                authorization: "secret-auth".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_upload_sends_headers_and_returns_stored_name() {
        let router = Router::new().route(
            "/file",
            post(|headers: HeaderMap| async move {
                assert_eq!(headers["authorization"], "secret-auth");
                assert_eq!(headers["file-name"], "ktp.png");
                Json(serde_json::json!({ "filename": "stored-ktp.png" }))
            }),
        );
        let store = store(spawn(router).await);

        let name = store
            .upload("ktp.png", Some("image/png"), vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(name, "stored-ktp.png");
    }

    #[tokio::test]
    async fn test_upload_failure_is_external_error() {
        let router = Router::new().route("/file", post(|| async { AxumStatus::BAD_GATEWAY }));
        let store = store(spawn(router).await);

        let err = store.upload("a.png", None, vec![0]).await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_delete_tolerates_missing_file() {
        let router = Router::new().route(
            "/file/:name",
            delete(|Path(name): Path<String>| async move {
                if name == "present.png" {
                    AxumStatus::OK
                } else {
                    AxumStatus::NOT_FOUND
                }
            }),
        );
        let store = store(spawn(router).await);

        store.delete("present.png").await.unwrap();
        store.delete("gone.png").await.unwrap();
    }
}
