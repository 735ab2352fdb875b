//! Snap and core API client

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use lendhub_common::PaymentConfig;
use lendhub_core::traits::{PaymentGateway, RepoResult};
use lendhub_core::{PaymentIntent, PaymentIntentRequest, TransactionStatusReport};

use crate::error::{IntegrationError, IntegrationResult};
use crate::http::join_url;

const SERVICE: &str = "payment gateway";

/// `start_time` layout expected by Snap, e.g. `2023-11-01 15:07:00 +0000`
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Serialize)]
struct SnapRequest<'a> {
    transaction_details: TransactionDetails<'a>,
    expiry: Expiry,
}

#[derive(Debug, Serialize)]
struct TransactionDetails<'a> {
    order_id: &'a str,
    gross_amount: i64,
}

#[derive(Debug, Serialize)]
struct Expiry {
    start_time: String,
    unit: &'static str,
    duration: u32,
}

impl<'a> From<&'a PaymentIntentRequest> for SnapRequest<'a> {
    fn from(request: &'a PaymentIntentRequest) -> Self {
        Self {
            transaction_details: TransactionDetails {
                order_id: &request.order_id,
                gross_amount: request.gross_amount,
            },
            expiry: Expiry {
                start_time: request.expiry_start.format(START_TIME_FORMAT).to_string(),
                unit: "day",
                duration: request.expiry_days,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SnapError {
    #[serde(default)]
    error_messages: Vec<String>,
}

/// Midtrans implementation of `PaymentGateway`
#[derive(Clone)]
pub struct MidtransGateway {
    client: reqwest::Client,
    snap_base_url: String,
    core_api_base_url: String,
    authorization: HeaderValue,
}

impl MidtransGateway {
    /// Build the gateway client. The server key is sent as `Basic base64(key)`.
    pub fn new(client: reqwest::Client, config: &PaymentConfig) -> IntegrationResult<Self> {
        let encoded = STANDARD.encode(config.server_key.as_bytes());
        let mut authorization = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| IntegrationError::Client(e.to_string()))?;
        authorization.set_sensitive(true);

        Ok(Self {
            client,
            snap_base_url: config.snap_base_url.clone(),
            core_api_base_url: config.core_api_base_url.clone(),
            authorization,
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    async fn send_intent(&self, request: &PaymentIntentRequest) -> IntegrationResult<PaymentIntent> {
        let response = self
            .client
            .post(join_url(&self.snap_base_url, "snap/v1/transactions"))
            .headers(self.headers())
            .json(&SnapRequest::from(request))
            .send()
            .await
            .map_err(IntegrationError::transport(SERVICE))?;

        if response.status() != StatusCode::CREATED {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let body = match serde_json::from_str::<SnapError>(&body) {
                Ok(err) if !err.error_messages.is_empty() => err.error_messages.join(", "),
                _ => body,
            };
            tracing::error!(status, body = %body, "Snap rejected payment request");
            return Err(IntegrationError::Status {
                service: SERVICE,
                status,
                body,
            });
        }

        response
            .json()
            .await
            .map_err(IntegrationError::decode(SERVICE))
    }

    async fn send_status(&self, order_id: &str) -> IntegrationResult<TransactionStatusReport> {
        let response = self
            .client
            .get(join_url(
                &self.core_api_base_url,
                &format!("v2/{order_id}/status"),
            ))
            .headers(self.headers())
            .send()
            .await
            .map_err(IntegrationError::transport(SERVICE))?;

        if !response.status().is_success() {
            return Err(IntegrationError::from_response(SERVICE, response).await);
        }

        response
            .json()
            .await
            .map_err(IntegrationError::decode(SERVICE))
    }
}

impl std::fmt::Debug for MidtransGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MidtransGateway")
            .field("snap_base_url", &self.snap_base_url)
            .field("core_api_base_url", &self.core_api_base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PaymentGateway for MidtransGateway {
    #[instrument(skip(self), fields(order_id = %request.order_id))]
    async fn create_intent(&self, request: &PaymentIntentRequest) -> RepoResult<PaymentIntent> {
        Ok(self.send_intent(request).await?)
    }

    #[instrument(skip(self))]
    async fn transaction_status(&self, order_id: &str) -> RepoResult<TransactionStatusReport> {
        Ok(self.send_status(order_id).await?)
    }
}
