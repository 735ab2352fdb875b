//! Business entity - a small enterprise selling products

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Business {
    pub fn new(id: Uuid, name: String, address: String, phone_number: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            address,
            phone_number,
            created_at: now,
            updated_at: now,
        }
    }
}
