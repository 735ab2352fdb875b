//! In-memory ports for service tests
//!
//! One shared state backs every repository and external port so joins and
//! reference checks behave like the Postgres implementations.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use lendhub_cache::{RedisPool, RedisPoolConfig};
use lendhub_common::auth::generate_refresh_string;
use lendhub_common::JwtService;
use lendhub_core::traits::{
    BlobStore, BusinessRepository, CreditPredictor, LendingRepository, OrderRepository,
    PaymentGateway, ProductRepository, RepoResult, SessionStore, UserRepository,
};
use lendhub_core::{
    Business, Credentials, CreditFeatures, DomainError, Lending, LendingStatus,
    LendingWithBorrower, Order, OrderListing, PaymentIntent, PaymentIntentRequest, Product,
    ProductImage, ProductListing, RefreshSession, TransactionStatusReport, User,
};
use lendhub_integrations::SignatureVerifier;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::dto::CreateProposalRequest;
use crate::services::{ServiceContext, ServiceContextBuilder, ServiceSettings};

pub const ORDER_PREFIX: &str = "LENDHUB";
pub const SERVER_KEY: &str = "SB-Mid-server-test";
const JWT_SECRET: &str = "service-test-secret";

/// A valid proposal: 5,000,000 at 12% over 12 months
pub fn proposal_request() -> CreateProposalRequest {
    CreateProposalRequest {
        amount: 5_000_000.0,
        interest_rate: 12,
        tenor: 12,
        age: 29,
        gender: true,
        income: 7_500_000.5,
        last_education: 2,
        marital_status: false,
        number_of_children: 0,
        has_house: true,
        kk_url: "kk-1.jpg".to_string(),
        ktp_url: "ktp-1.jpg".to_string(),
    }
}

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    businesses: Vec<Business>,
    products: Vec<Product>,
    images: Vec<ProductImage>,
    orders: Vec<Order>,
    lendings: Vec<Lending>,
    sessions: HashMap<String, RefreshSession>,
    blobs: HashMap<String, Vec<u8>>,
    features: Vec<CreditFeatures>,
    intents: Vec<PaymentIntentRequest>,
}

/// Every port the service context needs, over one in-memory state
#[derive(Clone, Default)]
pub struct InMemory {
    state: Arc<Mutex<State>>,
}

impl InMemory {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl UserRepository for InMemory {
    async fn find_credentials(&self, username: &str) -> RepoResult<Option<Credentials>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(user, hash)| Credentials {
                user: user.clone(),
                password_hash: hash.clone(),
            }))
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.lock().users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.lock().users.iter().map(|(u, _)| u.clone()).collect())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.lock();
        if state.users.iter().any(|(u, _)| u.username == user.username) {
            return Err(DomainError::Duplicate("username"));
        }
        state.users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update_by_username(
        &self,
        username: &str,
        is_admin: bool,
        password_hash: Option<&str>,
    ) -> RepoResult<()> {
        let mut state = self.lock();
        let (user, hash) = state
            .users
            .iter_mut()
            .find(|(u, _)| u.username == username)
            .ok_or(DomainError::NotFound("user"))?;
        user.is_admin = is_admin;
        if let Some(new_hash) = password_hash {
            *hash = new_hash.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.lock();
        if state.lendings.iter().any(|l| l.user_id == id) {
            return Err(DomainError::StillReferenced("user"));
        }
        let before = state.users.len();
        state.users.retain(|(u, _)| u.id != id);
        if state.users.len() == before {
            return Err(DomainError::NotFound("user"));
        }
        Ok(())
    }

    async fn upsert_admin(&self, username: &str, password_hash: &str) -> RepoResult<()> {
        let mut state = self.lock();
        match state.users.iter_mut().find(|(u, _)| u.username == username) {
            Some((user, hash)) => {
                user.is_admin = true;
                user.is_user = true;
                *hash = password_hash.to_string();
            }
            None => state.users.push((
                User::new(Uuid::new_v4(), username.to_string(), true, true),
                password_hash.to_string(),
            )),
        }
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.lock().users.len() as i64)
    }
}

#[async_trait]
impl BusinessRepository for InMemory {
    async fn search(&self, query: &str) -> RepoResult<Vec<Business>> {
        Ok(self
            .lock()
            .businesses
            .iter()
            .filter(|b| contains_ci(&b.name, query))
            .cloned()
            .collect())
    }

    async fn create(&self, business: &Business) -> RepoResult<()> {
        let mut state = self.lock();
        if state.businesses.iter().any(|b| b.name == business.name) {
            return Err(DomainError::Duplicate("business"));
        }
        state.businesses.push(business.clone());
        Ok(())
    }

    async fn update(&self, business: &Business) -> RepoResult<()> {
        let mut state = self.lock();
        if state
            .businesses
            .iter()
            .any(|b| b.name == business.name && b.id != business.id)
        {
            return Err(DomainError::Duplicate("business"));
        }
        let existing = state
            .businesses
            .iter_mut()
            .find(|b| b.id == business.id)
            .ok_or(DomainError::NotFound("business"))?;
        *existing = business.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.lock();
        if state.products.iter().any(|p| p.business_id == id) {
            return Err(DomainError::StillReferenced("business"));
        }
        let before = state.businesses.len();
        state.businesses.retain(|b| b.id != id);
        if state.businesses.len() == before {
            return Err(DomainError::NotFound("business"));
        }
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.lock().businesses.len() as i64)
    }
}

#[async_trait]
impl ProductRepository for InMemory {
    async fn search(&self, query: &str) -> RepoResult<Vec<ProductListing>> {
        let state = self.lock();
        Ok(state
            .products
            .iter()
            .filter(|p| contains_ci(&p.name, query))
            .filter_map(|p| {
                let business = state.businesses.iter().find(|b| b.id == p.business_id)?;
                Some(ProductListing {
                    product: p.clone(),
                    business_name: business.name.clone(),
                    images: state
                        .images
                        .iter()
                        .filter(|i| i.product_id == p.id)
                        .map(|i| i.file_name.clone())
                        .collect(),
                })
            })
            .collect())
    }

    async fn create(&self, product: &Product) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.businesses.iter().any(|b| b.id == product.business_id) {
            return Err(DomainError::DanglingReference("business"));
        }
        state.products.push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.businesses.iter().any(|b| b.id == product.business_id) {
            return Err(DomainError::DanglingReference("business"));
        }
        let existing = state
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(DomainError::NotFound("product"))?;
        *existing = product.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.lock();
        if state.orders.iter().any(|o| o.product_id == id) {
            return Err(DomainError::StillReferenced("product"));
        }
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(DomainError::NotFound("product"));
        }
        state.images.retain(|i| i.product_id != id);
        Ok(())
    }

    async fn add_image(&self, image: &ProductImage) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.products.iter().any(|p| p.id == image.product_id) {
            return Err(DomainError::DanglingReference("product"));
        }
        if state.images.iter().any(|i| i.file_name == image.file_name) {
            return Err(DomainError::Duplicate("image"));
        }
        state.images.push(image.clone());
        Ok(())
    }

    async fn find_image(&self, file_name: &str) -> RepoResult<Option<ProductImage>> {
        Ok(self.lock().images.iter().find(|i| i.file_name == file_name).cloned())
    }

    async fn delete_image(&self, file_name: &str) -> RepoResult<()> {
        let mut state = self.lock();
        let before = state.images.len();
        state.images.retain(|i| i.file_name != file_name);
        if state.images.len() == before {
            return Err(DomainError::NotFound("image"));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemory {
    async fn list(&self) -> RepoResult<Vec<OrderListing>> {
        let state = self.lock();
        Ok(state
            .orders
            .iter()
            .filter_map(|o| {
                let product = state.products.iter().find(|p| p.id == o.product_id)?;
                Some(OrderListing {
                    order: o.clone(),
                    product_name: product.name.clone(),
                    price: product.price,
                })
            })
            .collect())
    }

    async fn create(&self, order: &Order) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.products.iter().any(|p| p.id == order.product_id) {
            return Err(DomainError::DanglingReference("product"));
        }
        state.orders.push(order.clone());
        Ok(())
    }

    async fn update(&self, order: &Order) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.products.iter().any(|p| p.id == order.product_id) {
            return Err(DomainError::DanglingReference("product"));
        }
        let existing = state
            .orders
            .iter_mut()
            .find(|o| o.id == order.id)
            .ok_or(DomainError::NotFound("order"))?;
        *existing = order.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.lock();
        let before = state.orders.len();
        state.orders.retain(|o| o.id != id);
        if state.orders.len() == before {
            return Err(DomainError::NotFound("order"));
        }
        Ok(())
    }
}

impl InMemory {
    fn decide(&self, id: Uuid, approve: bool) -> RepoResult<()> {
        let mut state = self.lock();
        let lending = state
            .lendings
            .iter_mut()
            .find(|l| l.id == id && !l.is_approved && !l.is_rejected)
            .ok_or(DomainError::NotFound("lending"))?;
        if approve {
            lending.is_approved = true;
            lending.status = LendingStatus::Approved;
        } else {
            lending.is_rejected = true;
            lending.status = LendingStatus::Rejected;
        }
        Ok(())
    }

    fn update_status(&self, id: Uuid, status: &str, paid: bool) -> u64 {
        let mut state = self.lock();
        match state.lendings.iter_mut().find(|l| l.id == id) {
            Some(lending) => {
                lending.status = LendingStatus::from(status.to_string());
                lending.is_paid = lending.is_paid || paid;
                1
            }
            None => 0,
        }
    }
}

#[async_trait]
impl LendingRepository for InMemory {
    async fn create(&self, lending: &Lending) -> RepoResult<()> {
        self.lock().lendings.push(lending.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Lending>> {
        Ok(self.lock().lendings.iter().find(|l| l.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Lending>> {
        Ok(self
            .lock()
            .lendings
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> RepoResult<Vec<LendingWithBorrower>> {
        let state = self.lock();
        Ok(state
            .lendings
            .iter()
            .filter_map(|l| {
                let (user, _) = state.users.iter().find(|(u, _)| u.id == l.user_id)?;
                Some(LendingWithBorrower {
                    lending: l.clone(),
                    username: user.username.clone(),
                })
            })
            .collect())
    }

    async fn approve(&self, id: Uuid) -> RepoResult<()> {
        self.decide(id, true)
    }

    async fn reject(&self, id: Uuid) -> RepoResult<()> {
        self.decide(id, false)
    }

    async fn set_payment(&self, id: Uuid, token: &str, url: &str) -> RepoResult<()> {
        let mut state = self.lock();
        let lending = state
            .lendings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(DomainError::NotPayable)?;
        if !lending.is_payable() {
            return Err(DomainError::NotPayable);
        }
        lending.payment_token = Some(token.to_string());
        lending.payment_url = Some(url.to_string());
        Ok(())
    }

    async fn mark_paid(&self, id: Uuid, status: &str) -> RepoResult<u64> {
        Ok(self.update_status(id, status, true))
    }

    async fn set_status(&self, id: Uuid, status: &str) -> RepoResult<u64> {
        Ok(self.update_status(id, status, false))
    }

    async fn count_awaiting_approval(&self) -> RepoResult<i64> {
        Ok(self
            .lock()
            .lendings
            .iter()
            .filter(|l| !l.is_approved && !l.is_rejected)
            .count() as i64)
    }
}

#[async_trait]
impl SessionStore for InMemory {
    async fn create(&self, session: &RefreshSession) -> RepoResult<String> {
        let refresh = generate_refresh_string();
        self.lock().sessions.insert(refresh.clone(), session.clone());
        Ok(refresh)
    }

    async fn redeem(&self, refresh: &str) -> RepoResult<Option<RefreshSession>> {
        Ok(self.lock().sessions.get(refresh).cloned())
    }

    async fn revoke(&self, refresh: &str) -> RepoResult<()> {
        self.lock().sessions.remove(refresh);
        Ok(())
    }
}

#[async_trait]
impl BlobStore for InMemory {
    async fn upload(
        &self,
        file_name: &str,
        _content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> RepoResult<String> {
        let stored = format!("{}-{file_name}", Uuid::new_v4().simple());
        self.lock().blobs.insert(stored.clone(), bytes);
        Ok(stored)
    }

    async fn delete(&self, file_name: &str) -> RepoResult<()> {
        self.lock().blobs.remove(file_name);
        Ok(())
    }
}

#[async_trait]
impl CreditPredictor for InMemory {
    async fn predict(&self, features: &CreditFeatures) -> RepoResult<Vec<String>> {
        self.lock().features.push(*features);
        Ok(vec!["Layak".to_string()])
    }
}

#[async_trait]
impl PaymentGateway for InMemory {
    async fn create_intent(&self, request: &PaymentIntentRequest) -> RepoResult<PaymentIntent> {
        let mut state = self.lock();
        state.intents.push(request.clone());
        let n = state.intents.len();
        Ok(PaymentIntent {
            token: format!("snap-token-{n}"),
            redirect_url: format!("https://pay.test/v4/redirection/snap-token-{n}"),
        })
    }

    async fn transaction_status(&self, order_id: &str) -> RepoResult<TransactionStatusReport> {
        Ok(TransactionStatusReport {
            order_id: order_id.to_string(),
            transaction_status: "pending".to_string(),
            status_code: "201".to_string(),
            gross_amount: None,
            payment_type: None,
            fraud_status: None,
            transaction_time: None,
        })
    }
}

/// Builds service contexts over a shared [`InMemory`] store
///
/// Must be used inside a tokio runtime; the lazy pools never connect.
pub struct TestHarness {
    store: InMemory,
    jwt: Arc<JwtService>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            store: InMemory::default(),
            jwt: Arc::new(JwtService::new(JWT_SECRET).unwrap()),
        }
    }

    pub fn context(&self) -> ServiceContext {
        let store = Arc::new(self.store.clone());
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://lendhub@localhost/lendhub_test")
            .unwrap();
        let redis_pool = RedisPool::new(RedisPoolConfig::default()).unwrap();

        ServiceContextBuilder::new()
            .pool(pool)
            .redis_pool(redis_pool)
            .user_repo(store.clone())
            .business_repo(store.clone())
            .product_repo(store.clone())
            .order_repo(store.clone())
            .lending_repo(store.clone())
            .session_store(store.clone())
            .blob_store(store.clone())
            .credit_predictor(store.clone())
            .payment_gateway(store)
            .signature_verifier(SignatureVerifier::new(SERVER_KEY))
            .jwt_service(Arc::clone(&self.jwt))
            .settings(ServiceSettings {
                access_window_minutes: 3,
                admin_username: "admin".to_string(),
                order_prefix: ORDER_PREFIX.to_string(),
                payment_expiry_days: 30,
            })
            .build()
            .unwrap()
    }

    /// Insert a user whose password is `password`
    pub fn add_user(&self, user: User, password: &str) -> User {
        let hash = lendhub_common::hash_password(password).unwrap();
        self.store.lock().users.push((user.clone(), hash));
        user
    }

    pub fn add_business(&self, business: Business) -> Business {
        self.store.lock().businesses.push(business.clone());
        business
    }

    pub fn add_product(&self, product: Product) -> Product {
        self.store.lock().products.push(product.clone());
        product
    }

    pub fn user(&self, username: &str) -> Option<User> {
        self.store
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone())
    }

    pub fn user_exists(&self, username: &str) -> bool {
        self.user(username).is_some()
    }

    pub fn lending(&self, id: Uuid) -> Option<Lending> {
        self.store.lock().lendings.iter().find(|l| l.id == id).cloned()
    }

    pub fn session_count(&self) -> usize {
        self.store.lock().sessions.len()
    }

    pub fn blob_exists(&self, name: &str) -> bool {
        self.store.lock().blobs.contains_key(name)
    }

    pub fn blob_count(&self) -> usize {
        self.store.lock().blobs.len()
    }

    pub fn last_features(&self) -> Option<CreditFeatures> {
        self.store.lock().features.last().copied()
    }

    pub fn intent_requests(&self) -> Vec<PaymentIntentRequest> {
        self.store.lock().intents.clone()
    }
}
