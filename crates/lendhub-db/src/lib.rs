//! # lendhub-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lendhub_db::{create_pool, PoolSettings, PgUserRepository};
//!
//! async fn example(config: &lendhub_common::DatabaseConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&PoolSettings::from(config)).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolSettings};
pub use repositories::{
    PgBusinessRepository, PgLendingRepository, PgOrderRepository, PgProductRepository,
    PgUserRepository,
};
