//! Refresh session storage in Redis.
//!
//! Each login stores a `RefreshSession` under a fresh random string with a
//! store-side TTL. Expiry is left entirely to Redis.

use async_trait::async_trait;
use tracing::instrument;

use lendhub_common::generate_refresh_string;
use lendhub_core::entities::RefreshSession;
use lendhub_core::error::DomainError;
use lendhub_core::traits::{RepoResult, SessionStore};

use crate::pool::{RedisPool, RedisPoolError};

/// Key prefix for refresh sessions
const REFRESH_SESSION_PREFIX: &str = "refresh_session:";

/// Default TTL for refresh sessions (24 hours)
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

fn map_cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

/// Redis-backed `SessionStore`
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// Create a store with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self::with_ttl(pool, DEFAULT_SESSION_TTL_SECS)
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    fn key(refresh: &str) -> String {
        format!("{REFRESH_SESSION_PREFIX}{refresh}")
    }

    fn decode(refresh: &str, raw: &str) -> Option<RefreshSession> {
        match serde_json::from_str(raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, key = %Self::key(refresh), "Unreadable refresh session");
                None
            }
        }
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    #[instrument(skip(self, session), fields(uid = %session.uid))]
    async fn create(&self, session: &RefreshSession) -> RepoResult<String> {
        let refresh = generate_refresh_string();
        self.pool
            .set_json(&Self::key(&refresh), session, self.ttl_seconds)
            .await
            .map_err(map_cache_error)?;

        tracing::debug!(jti = %session.jti, "Stored refresh session");
        Ok(refresh)
    }

    #[instrument(skip_all)]
    async fn redeem(&self, refresh: &str) -> RepoResult<Option<RefreshSession>> {
        let raw = self
            .pool
            .get_raw(&Self::key(refresh))
            .await
            .map_err(map_cache_error)?;

        Ok(raw.and_then(|raw| Self::decode(refresh, &raw)))
    }

    #[instrument(skip_all)]
    async fn revoke(&self, refresh: &str) -> RepoResult<()> {
        let deleted = self
            .pool
            .delete(&Self::key(refresh))
            .await
            .map_err(map_cache_error)?;

        if deleted {
            tracing::debug!("Revoked refresh session");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lendhub_core::{Role, RoleSet};
    use uuid::Uuid;

    use super::*;
    use crate::pool::RedisPoolConfig;

    fn session() -> RefreshSession {
        RefreshSession {
            uid: Uuid::new_v4(),
            jti: "abcd1234".to_string(),
            roles: RoleSet::from([Role::User]),
        }
    }

    #[test]
    fn test_key_generation() {
        assert_eq!(RedisSessionStore::key("abc123"), "refresh_session:abc123");
    }

    #[test]
    fn test_decode_valid_record() {
        let expected = session();
        let raw = serde_json::to_string(&expected).unwrap();
        assert_eq!(RedisSessionStore::decode("r", &raw), Some(expected));
    }

    #[test]
    fn test_decode_garbage_is_none() {
        assert_eq!(RedisSessionStore::decode("r", "not json"), None);
        assert_eq!(RedisSessionStore::decode("r", r#"{"uid":"nope"}"#), None);
    }

    #[tokio::test]
    async fn test_store_round_trip() {
        let Ok(url) = std::env::var("REDIS_URL") else {
            eprintln!("Skipping test: REDIS_URL not set");
            return;
        };
        let pool = RedisPool::new(RedisPoolConfig {
            url,
            max_connections: 2,
        })
        .unwrap();
        let store = RedisSessionStore::with_ttl(pool, 60);
        let session = session();

        let refresh = store.create(&session).await.unwrap();
        assert!(refresh.len() >= 43);

        // Redeeming does not consume the session
        assert_eq!(store.redeem(&refresh).await.unwrap(), Some(session.clone()));
        assert_eq!(store.redeem(&refresh).await.unwrap(), Some(session));

        store.revoke(&refresh).await.unwrap();
        assert_eq!(store.redeem(&refresh).await.unwrap(), None);
        assert_eq!(store.redeem("unknown-refresh").await.unwrap(), None);
    }
}
