//! Service context - dependency container for services
//!
//! Holds all repositories, the session store, external ports and settings
//! needed by services. Built once at startup and shared behind an `Arc`.

use std::sync::Arc;

use lendhub_cache::RedisPool;
use lendhub_common::{AppConfig, JwtService};
use lendhub_core::traits::{
    BlobStore, BusinessRepository, CreditPredictor, LendingRepository, OrderRepository,
    PaymentGateway, ProductRepository, SessionStore, UserRepository,
};
use lendhub_db::PgPool;
use lendhub_integrations::SignatureVerifier;

use super::error::{ServiceError, ServiceResult};

/// Settings services read on every call
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Minutes an access token stays valid after issue
    pub access_window_minutes: i64,
    /// Bootstrap administrator that user administration may not touch
    pub admin_username: String,
    /// Prefix of order ids sent to the payment gateway
    pub order_prefix: String,
    /// Lifetime of a hosted payment page
    pub payment_expiry_days: u32,
}

impl From<&AppConfig> for ServiceSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            access_window_minutes: config.jwt.access_window_minutes,
            admin_username: config.admin.username.clone(),
            order_prefix: config.payment.order_prefix.clone(),
            payment_expiry_days: config.payment.expiry_days,
        }
    }
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Pools, kept for readiness checks
    pool: PgPool,
    redis_pool: RedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    business_repo: Arc<dyn BusinessRepository>,
    product_repo: Arc<dyn ProductRepository>,
    order_repo: Arc<dyn OrderRepository>,
    lending_repo: Arc<dyn LendingRepository>,

    // Sessions
    session_store: Arc<dyn SessionStore>,

    // External services
    blob_store: Arc<dyn BlobStore>,
    credit_predictor: Arc<dyn CreditPredictor>,
    payment_gateway: Arc<dyn PaymentGateway>,
    signature_verifier: SignatureVerifier,

    jwt_service: Arc<JwtService>,
    settings: ServiceSettings,
}

impl ServiceContext {
    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn business_repo(&self) -> &dyn BusinessRepository {
        self.business_repo.as_ref()
    }

    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    pub fn order_repo(&self) -> &dyn OrderRepository {
        self.order_repo.as_ref()
    }

    pub fn lending_repo(&self) -> &dyn LendingRepository {
        self.lending_repo.as_ref()
    }

    // === Sessions ===

    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    // === External services ===

    pub fn blob_store(&self) -> &dyn BlobStore {
        self.blob_store.as_ref()
    }

    pub fn credit_predictor(&self) -> &dyn CreditPredictor {
        self.credit_predictor.as_ref()
    }

    pub fn payment_gateway(&self) -> &dyn PaymentGateway {
        self.payment_gateway.as_ref()
    }

    pub fn signature_verifier(&self) -> &SignatureVerifier {
        &self.signature_verifier
    }

    // === Auth and settings ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Shared handle to the JWT service, for middleware that outlives a request
    pub fn jwt_service_arc(&self) -> Arc<JwtService> {
        Arc::clone(&self.jwt_service)
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &self.redis_pool)
            .field("repositories", &"...")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    business_repo: Option<Arc<dyn BusinessRepository>>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    order_repo: Option<Arc<dyn OrderRepository>>,
    lending_repo: Option<Arc<dyn LendingRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    blob_store: Option<Arc<dyn BlobStore>>,
    credit_predictor: Option<Arc<dyn CreditPredictor>>,
    payment_gateway: Option<Arc<dyn PaymentGateway>>,
    signature_verifier: Option<SignatureVerifier>,
    jwt_service: Option<Arc<JwtService>>,
    settings: Option<ServiceSettings>,
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: RedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn business_repo(mut self, repo: Arc<dyn BusinessRepository>) -> Self {
        self.business_repo = Some(repo);
        self
    }

    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = Some(repo);
        self
    }

    pub fn order_repo(mut self, repo: Arc<dyn OrderRepository>) -> Self {
        self.order_repo = Some(repo);
        self
    }

    pub fn lending_repo(mut self, repo: Arc<dyn LendingRepository>) -> Self {
        self.lending_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn blob_store(mut self, store: Arc<dyn BlobStore>) -> Self {
        self.blob_store = Some(store);
        self
    }

    pub fn credit_predictor(mut self, predictor: Arc<dyn CreditPredictor>) -> Self {
        self.credit_predictor = Some(predictor);
        self
    }

    pub fn payment_gateway(mut self, gateway: Arc<dyn PaymentGateway>) -> Self {
        self.payment_gateway = Some(gateway);
        self
    }

    pub fn signature_verifier(mut self, verifier: SignatureVerifier) -> Self {
        self.signature_verifier = Some(verifier);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            redis_pool: required(self.redis_pool, "redis_pool")?,
            user_repo: required(self.user_repo, "user_repo")?,
            business_repo: required(self.business_repo, "business_repo")?,
            product_repo: required(self.product_repo, "product_repo")?,
            order_repo: required(self.order_repo, "order_repo")?,
            lending_repo: required(self.lending_repo, "lending_repo")?,
            session_store: required(self.session_store, "session_store")?,
            blob_store: required(self.blob_store, "blob_store")?,
            credit_predictor: required(self.credit_predictor, "credit_predictor")?,
            payment_gateway: required(self.payment_gateway, "payment_gateway")?,
            signature_verifier: required(self.signature_verifier, "signature_verifier")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            settings: required(self.settings, "settings")?,
        })
    }
}
