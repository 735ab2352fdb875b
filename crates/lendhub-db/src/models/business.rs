//! Business database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for businesses table
#[derive(Debug, Clone, FromRow)]
pub struct BusinessModel {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
