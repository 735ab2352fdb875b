//! # lendhub-cache
//!
//! Redis layer backing refresh sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: `SessionStore` implementation with store-side expiry
//!
//! ## Example
//!
//! ```ignore
//! use lendhub_cache::{RedisPool, RedisPoolConfig, RedisSessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = RedisSessionStore::with_ttl(pool, 24 * 60 * 60);
//! let refresh = sessions.create(&session).await?;
//! ```

pub mod pool;
pub mod session;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use session::{RedisSessionStore, DEFAULT_SESSION_TTL_SECS};
