//! Session storage module.
//!
//! Redis-backed refresh sessions keyed by opaque random strings.

mod refresh_session;

pub use refresh_session::{RedisSessionStore, DEFAULT_SESSION_TTL_SECS};
