//! # lendhub-integrations
//!
//! Outbound adapters for the services LendHub depends on:
//!
//! - [`HttpBlobStore`]: document and image storage (`BlobStore`)
//! - [`HttpCreditPredictor`]: credit scoring model (`CreditPredictor`)
//! - [`MidtransGateway`]: hosted payment pages and status lookups (`PaymentGateway`)
//! - [`SignatureVerifier`]: payment notification signatures
//!
//! Every client shares one `reqwest::Client` configured with the outbound timeout.

mod blob;
mod error;
mod http;
mod midtrans;
mod predictor;

pub use blob::HttpBlobStore;
pub use error::{IntegrationError, IntegrationResult};
pub use http::build_client;
pub use midtrans::{MidtransGateway, SignatureVerifier};
pub use predictor::HttpCreditPredictor;
