//! Ports implemented by the infrastructure crates

mod ports;
mod repositories;

pub use ports::{BlobStore, CreditPredictor, PaymentGateway, SessionStore};
pub use repositories::{
    BusinessRepository, LendingRepository, OrderRepository, ProductRepository, RepoResult,
    UserRepository,
};
