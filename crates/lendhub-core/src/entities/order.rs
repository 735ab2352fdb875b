//! Order entity - a sale of a product with a commission percentage

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Commission percentage taken by the platform (0..=100)
    pub commission: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: Uuid, product_id: Uuid, quantity: i32, commission: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            product_id,
            quantity,
            commission,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Order joined with the product it sells
#[derive(Debug, Clone, PartialEq)]
pub struct OrderListing {
    pub order: Order,
    pub product_name: String,
    pub price: f64,
}

impl OrderListing {
    /// Platform profit: price × quantity × commission%
    pub fn profit(&self) -> f64 {
        self.price * f64::from(self.order.quantity) * f64::from(self.order.commission) / 100.0
    }
}
