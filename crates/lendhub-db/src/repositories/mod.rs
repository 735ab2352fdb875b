//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in lendhub-core.
//! Each repository handles database operations for a specific domain entity.

mod business;
mod error;
mod lending;
mod order;
mod product;
mod user;

pub use business::PgBusinessRepository;
pub use lending::PgLendingRepository;
pub use order::PgOrderRepository;
pub use product::PgProductRepository;
pub use user::PgUserRepository;
