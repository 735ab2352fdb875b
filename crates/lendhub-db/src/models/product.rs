//! Product database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub business_id: Uuid,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product row joined with its business name and aggregated image names
#[derive(Debug, Clone, FromRow)]
pub struct ProductListingModel {
    #[sqlx(flatten)]
    pub product: ProductModel,
    pub business_name: String,
    pub images: Vec<String>,
}

/// Database model for product_images table
#[derive(Debug, Clone, FromRow)]
pub struct ProductImageModel {
    pub id: Uuid,
    pub product_id: Uuid,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}
