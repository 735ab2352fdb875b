//! Credit prediction client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use lendhub_common::PredictorConfig;
use lendhub_core::traits::{CreditPredictor, RepoResult};
use lendhub_core::CreditFeatures;

use crate::error::{IntegrationError, IntegrationResult};
use crate::http::join_url;

const SERVICE: &str = "credit predictor";

/// Request row in the model's own column names
#[derive(Debug, Serialize)]
struct PredictRequest {
    #[serde(rename = "Age")]
    age: i64,
    #[serde(rename = "Gender")]
    gender: i64,
    #[serde(rename = "Income")]
    income: i64,
    #[serde(rename = "Education")]
    education: i64,
    #[serde(rename = "Marital_Status")]
    marital_status: i64,
    #[serde(rename = "Number_of_Children")]
    number_of_children: i64,
    #[serde(rename = "Home_Ownership")]
    home_ownership: i64,
}

impl From<&CreditFeatures> for PredictRequest {
    fn from(f: &CreditFeatures) -> Self {
        Self {
            age: f.age,
            gender: f.gender,
            income: f.income,
            education: f.education,
            marital_status: f.marital_status,
            number_of_children: f.number_of_children,
            home_ownership: f.home_ownership,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predictions: Vec<String>,
}

/// HTTP implementation of `CreditPredictor`
#[derive(Debug, Clone)]
pub struct HttpCreditPredictor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCreditPredictor {
    pub fn new(client: reqwest::Client, config: &PredictorConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    async fn send(&self, features: &CreditFeatures) -> IntegrationResult<Vec<String>> {
        let response = self
            .client
            .post(join_url(&self.base_url, "predict"))
            .json(&PredictRequest::from(features))
            .send()
            .await
            .map_err(IntegrationError::transport(SERVICE))?;

        if !response.status().is_success() {
            return Err(IntegrationError::from_response(SERVICE, response).await);
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(IntegrationError::decode(SERVICE))?;
        Ok(body.predictions)
    }
}

#[async_trait]
impl CreditPredictor for HttpCreditPredictor {
    #[instrument(skip_all)]
    async fn predict(&self, features: &CreditFeatures) -> RepoResult<Vec<String>> {
        Ok(self.send(features).await?)
    }
}
