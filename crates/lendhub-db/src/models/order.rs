//! Order database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for orders table
#[derive(Debug, Clone, FromRow)]
pub struct OrderModel {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub commission: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order row joined with product name and price
#[derive(Debug, Clone, FromRow)]
pub struct OrderListingModel {
    #[sqlx(flatten)]
    pub order: OrderModel,
    pub product_name: String,
    pub price: f64,
}
