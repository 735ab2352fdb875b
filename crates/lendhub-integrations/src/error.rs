//! Integration error type

use lendhub_core::DomainError;

/// Failure talking to an external service
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} response could not be decoded: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl IntegrationError {
    pub(crate) fn transport(service: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Transport { service, source }
    }

    pub(crate) fn decode(service: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |e| Self::Decode {
            service,
            message: e.to_string(),
        }
    }

    /// Read the body of an unexpected response into a `Status` error
    pub(crate) async fn from_response(service: &'static str, response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(service, status, body = %body, "Unexpected upstream response");
        Self::Status {
            service,
            status,
            body,
        }
    }
}

impl From<IntegrationError> for DomainError {
    fn from(e: IntegrationError) -> Self {
        DomainError::ExternalService(e.to_string())
    }
}

/// Result type for integration calls
pub type IntegrationResult<T> = Result<T, IntegrationError>;
