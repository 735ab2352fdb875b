//! # lendhub-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! ports through which the service layer reaches external collaborators.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Business, Credentials, Lending, LendingWithBorrower, Order, OrderListing, Product,
    ProductImage, ProductListing, RefreshSession, User,
};
pub use error::DomainError;
pub use traits::{
    BlobStore, BusinessRepository, CreditPredictor, LendingRepository, OrderRepository,
    PaymentGateway, ProductRepository, RepoResult, SessionStore, UserRepository,
};
pub use value_objects::{
    BorrowerProfile, CreditFeatures, Education, Gender, HomeOwnership, LendingStatus,
    MaritalStatus, PaymentIntent, PaymentIntentRequest, PaymentOutcome, Role, RoleParseError,
    RoleSet, TransactionStatusReport,
};
