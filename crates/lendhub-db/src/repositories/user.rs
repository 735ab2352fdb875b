//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use lendhub_core::entities::{Credentials, User};
use lendhub_core::error::DomainError;
use lendhub_core::traits::{RepoResult, UserRepository};

use crate::mappers::credentials_from_model;
use crate::models::UserModel;

use super::error::{expect_row, map_db_error, map_foreign_key_violation, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_credentials(&self, username: &str) -> RepoResult<Option<Credentials>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, password_hash, is_admin, is_user, created_at, updated_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(credentials_from_model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, password_hash, is_admin, is_user, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, password_hash, is_admin, is_user, created_at, updated_at
            FROM users
            ORDER BY created_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, password_hash), fields(username = %user.username))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, password_hash, is_admin, is_user, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(password_hash)
        .bind(user.is_admin)
        .bind(user.is_user)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::Duplicate("username")))?;

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update_by_username(
        &self,
        username: &str,
        is_admin: bool,
        password_hash: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET is_admin = $2,
                password_hash = COALESCE($3, password_hash),
                updated_at = NOW()
            WHERE username = $1
            ",
        )
        .bind(username)
        .bind(is_admin)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        expect_row(result, "user")
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, || DomainError::StillReferenced("user")))?;

        expect_row(result, "user")
    }

    #[instrument(skip(self, password_hash))]
    async fn upsert_admin(&self, username: &str, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, password_hash, is_admin, is_user)
            VALUES ($1, $2, $3, TRUE, TRUE)
            ON CONFLICT (username) DO UPDATE
            SET password_hash = EXCLUDED.password_hash,
                is_admin = TRUE,
                is_user = TRUE,
                updated_at = NOW()
            ",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
