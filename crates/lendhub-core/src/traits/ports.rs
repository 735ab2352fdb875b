//! Ports to non-relational collaborators: the session store and the
//! HTTP services for blobs, credit prediction and payments.

use async_trait::async_trait;

use crate::entities::RefreshSession;
use crate::traits::RepoResult;
use crate::value_objects::{
    CreditFeatures, PaymentIntent, PaymentIntentRequest, TransactionStatusReport,
};

/// Refresh session persistence with store-enforced expiry
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the session and return the opaque refresh string that keys it
    async fn create(&self, session: &RefreshSession) -> RepoResult<String>;

    /// Look up a session. Unknown, expired and unreadable records are all `None`.
    /// The record stays valid after a successful lookup.
    async fn redeem(&self, refresh: &str) -> RepoResult<Option<RefreshSession>>;

    /// Remove a session
    async fn revoke(&self, refresh: &str) -> RepoResult<()>;
}

/// File storage service
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload a file and return the name it is stored under
    async fn upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> RepoResult<String>;

    /// Delete a stored file. A file that is already gone is not an error.
    async fn delete(&self, file_name: &str) -> RepoResult<()>;
}

/// Credit scoring model
#[async_trait]
pub trait CreditPredictor: Send + Sync {
    async fn predict(&self, features: &CreditFeatures) -> RepoResult<Vec<String>>;
}

/// Payment gateway
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Open a hosted payment page
    async fn create_intent(&self, request: &PaymentIntentRequest) -> RepoResult<PaymentIntent>;

    /// Query the gateway for the current state of an order
    async fn transaction_status(&self, order_id: &str) -> RepoResult<TransactionStatusReport>;
}
