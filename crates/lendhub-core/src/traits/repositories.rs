//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Business, Credentials, Lending, LendingWithBorrower, Order, OrderListing, Product,
    ProductImage, ProductListing, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Load a user and its password hash by username
    async fn find_credentials(&self, username: &str) -> RepoResult<Option<Credentials>>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// List all users
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Create a new user. Fails with `Duplicate` when the username is taken.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update the admin flag and, when given, the password of a user
    async fn update_by_username(
        &self,
        username: &str,
        is_admin: bool,
        password_hash: Option<&str>,
    ) -> RepoResult<()>;

    /// Delete a user
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Create or reset the bootstrap administrator
    async fn upsert_admin(&self, username: &str, password_hash: &str) -> RepoResult<()>;

    /// Count all users
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Business Repository
// ============================================================================

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find businesses whose name contains `query` (all when empty)
    async fn search(&self, query: &str) -> RepoResult<Vec<Business>>;

    /// Create a new business. Fails with `Duplicate` on a taken name.
    async fn create(&self, business: &Business) -> RepoResult<()>;

    /// Update an existing business
    async fn update(&self, business: &Business) -> RepoResult<()>;

    /// Delete a business
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Count all businesses
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find products whose name contains `query`, with business name and images
    async fn search(&self, query: &str) -> RepoResult<Vec<ProductListing>>;

    /// Create a new product. Fails with `DanglingReference` on an unknown business.
    async fn create(&self, product: &Product) -> RepoResult<()>;

    /// Update an existing product
    async fn update(&self, product: &Product) -> RepoResult<()>;

    /// Delete a product
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Attach an uploaded image. Fails with `DanglingReference` on an unknown product.
    async fn add_image(&self, image: &ProductImage) -> RepoResult<()>;

    /// Find an image by blob file name
    async fn find_image(&self, file_name: &str) -> RepoResult<Option<ProductImage>>;

    /// Delete an image row by blob file name
    async fn delete_image(&self, file_name: &str) -> RepoResult<()>;
}

// ============================================================================
// Order Repository
// ============================================================================

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List all orders with product name and price
    async fn list(&self) -> RepoResult<Vec<OrderListing>>;

    /// Create a new order. Fails with `DanglingReference` on an unknown product.
    async fn create(&self, order: &Order) -> RepoResult<()>;

    /// Update an existing order
    async fn update(&self, order: &Order) -> RepoResult<()>;

    /// Delete an order
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Lending Repository
// ============================================================================

#[async_trait]
pub trait LendingRepository: Send + Sync {
    /// Insert a new proposal
    async fn create(&self, lending: &Lending) -> RepoResult<()>;

    /// Find lending by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Lending>>;

    /// Proposals submitted by one borrower, newest first
    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Lending>>;

    /// All proposals with borrower usernames, newest first
    async fn list_all(&self) -> RepoResult<Vec<LendingWithBorrower>>;

    /// Approve a pending proposal. `NotFound` when no pending row matches.
    async fn approve(&self, id: Uuid) -> RepoResult<()>;

    /// Reject a pending proposal. `NotFound` when no pending row matches.
    async fn reject(&self, id: Uuid) -> RepoResult<()>;

    /// Store the payment page issued by the gateway. Only an approved row with
    /// no token yet is updated; otherwise `NotPayable`.
    async fn set_payment(&self, id: Uuid, token: &str, url: &str) -> RepoResult<()>;

    /// Set `is_paid` and the provider status; returns rows affected
    async fn mark_paid(&self, id: Uuid, status: &str) -> RepoResult<u64>;

    /// Set the provider status only; returns rows affected
    async fn set_status(&self, id: Uuid, status: &str) -> RepoResult<u64>;

    /// Count proposals neither approved nor rejected
    async fn count_awaiting_approval(&self) -> RepoResult<i64>;
}
