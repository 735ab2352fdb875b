//! PostgreSQL implementation of BusinessRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use lendhub_core::entities::Business;
use lendhub_core::error::DomainError;
use lendhub_core::traits::{BusinessRepository, RepoResult};

use crate::models::BusinessModel;

use super::error::{
    expect_row, like_pattern, map_db_error, map_foreign_key_violation, map_unique_violation,
};

/// PostgreSQL implementation of BusinessRepository
#[derive(Clone)]
pub struct PgBusinessRepository {
    pool: PgPool,
}

impl PgBusinessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> RepoResult<Vec<Business>> {
        let rows = sqlx::query_as::<_, BusinessModel>(
            r"
            SELECT id, name, address, phone_number, created_at, updated_at
            FROM businesses
            WHERE name ILIKE $1
            ORDER BY name
            ",
        )
        .bind(like_pattern(query))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Business::from).collect())
    }

    #[instrument(skip(self), fields(name = %business.name))]
    async fn create(&self, business: &Business) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO businesses (id, name, address, phone_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(business.id)
        .bind(&business.name)
        .bind(&business.address)
        .bind(&business.phone_number)
        .bind(business.created_at)
        .bind(business.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::Duplicate("business")))?;

        Ok(())
    }

    #[instrument(skip(self), fields(id = %business.id))]
    async fn update(&self, business: &Business) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE businesses
            SET name = $2, address = $3, phone_number = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(business.id)
        .bind(&business.name)
        .bind(&business.address)
        .bind(&business.phone_number)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::Duplicate("business")))?;

        expect_row(result, "business")
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM businesses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_foreign_key_violation(e, || DomainError::StillReferenced("business"))
            })?;

        expect_row(result, "business")
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM businesses")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
