//! Product entity and its images

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A product offered by a business
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub business_id: Uuid,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: Uuid,
        name: String,
        description: String,
        business_id: Uuid,
        price: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            business_id,
            price,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An image attached to a product; `file_name` is the blob store key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

impl ProductImage {
    pub fn new(id: Uuid, product_id: Uuid, file_name: String) -> Self {
        Self {
            id,
            product_id,
            file_name,
            created_at: Utc::now(),
        }
    }
}

/// Product joined with its owning business and image file names
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub product: Product,
    pub business_name: String,
    pub images: Vec<String>,
}
