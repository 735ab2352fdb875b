//! PostgreSQL implementation of OrderRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use lendhub_core::entities::{Order, OrderListing};
use lendhub_core::error::DomainError;
use lendhub_core::traits::{OrderRepository, RepoResult};

use crate::models::OrderListingModel;

use super::error::{expect_row, map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of OrderRepository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<OrderListing>> {
        let rows = sqlx::query_as::<_, OrderListingModel>(
            r"
            SELECT o.id, o.product_id, o.quantity, o.commission, o.created_at, o.updated_at,
                   p.name AS product_name, p.price
            FROM orders o
            JOIN products p ON p.id = o.product_id
            ORDER BY o.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(OrderListing::from).collect())
    }

    #[instrument(skip(self), fields(product_id = %order.product_id))]
    async fn create(&self, order: &Order) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO orders (id, product_id, quantity, commission, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(order.id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.commission)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::DanglingReference("product")))?;

        Ok(())
    }

    #[instrument(skip(self), fields(id = %order.id))]
    async fn update(&self, order: &Order) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE orders
            SET product_id = $2, quantity = $3, commission = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(order.id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.commission)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::DanglingReference("product")))?;

        expect_row(result, "order")
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        expect_row(result, "order")
    }
}
