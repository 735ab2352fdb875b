//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use lendhub_core::entities::{Product, ProductImage, ProductListing};
use lendhub_core::error::DomainError;
use lendhub_core::traits::{ProductRepository, RepoResult};

use crate::models::{ProductImageModel, ProductListingModel};

use super::error::{
    expect_row, like_pattern, map_db_error, map_foreign_key_violation, map_write_error,
};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> RepoResult<Vec<ProductListing>> {
        let rows = sqlx::query_as::<_, ProductListingModel>(
            r"
            SELECT p.id, p.name, p.description, p.business_id, p.price,
                   p.created_at, p.updated_at,
                   b.name AS business_name,
                   COALESCE(
                       ARRAY_AGG(i.file_name ORDER BY i.created_at)
                           FILTER (WHERE i.file_name IS NOT NULL),
                       '{}'
                   ) AS images
            FROM products p
            JOIN businesses b ON b.id = p.business_id
            LEFT JOIN product_images i ON i.product_id = p.id
            WHERE p.name ILIKE $1
            GROUP BY p.id, b.name
            ORDER BY p.name
            ",
        )
        .bind(like_pattern(query))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ProductListing::from).collect())
    }

    #[instrument(skip(self), fields(name = %product.name))]
    async fn create(&self, product: &Product) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO products (id, name, description, business_id, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.business_id)
        .bind(product.price)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "product", "business"))?;

        Ok(())
    }

    #[instrument(skip(self), fields(id = %product.id))]
    async fn update(&self, product: &Product) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = $2, description = $3, business_id = $4, price = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.business_id)
        .bind(product.price)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "product", "business"))?;

        expect_row(result, "product")
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_foreign_key_violation(e, || DomainError::StillReferenced("product"))
            })?;

        expect_row(result, "product")
    }

    #[instrument(skip(self), fields(product_id = %image.product_id))]
    async fn add_image(&self, image: &ProductImage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO product_images (id, product_id, file_name, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(image.id)
        .bind(image.product_id)
        .bind(&image.file_name)
        .bind(image.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "image", "product"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_image(&self, file_name: &str) -> RepoResult<Option<ProductImage>> {
        let result = sqlx::query_as::<_, ProductImageModel>(
            r"
            SELECT id, product_id, file_name, created_at
            FROM product_images
            WHERE file_name = $1
            ",
        )
        .bind(file_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ProductImage::from))
    }

    #[instrument(skip(self))]
    async fn delete_image(&self, file_name: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM product_images WHERE file_name = $1")
            .bind(file_name)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        expect_row(result, "image")
    }
}
