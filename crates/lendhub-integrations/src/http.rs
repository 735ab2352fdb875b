//! Shared outbound HTTP client

use lendhub_common::HttpClientConfig;

use crate::error::{IntegrationError, IntegrationResult};

/// Build the client used by every adapter in this crate
pub fn build_client(config: &HttpClientConfig) -> IntegrationResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|e| IntegrationError::Client(e.to_string()))
}

/// Join a configured base URL and a path without doubling slashes
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
