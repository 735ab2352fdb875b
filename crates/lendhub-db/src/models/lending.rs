//! Lending database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for lendings table
#[derive(Debug, Clone, FromRow)]
pub struct LendingModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub interest_rate: i32,
    pub tenor: i32,
    pub age: i32,
    pub gender: bool,
    pub income: f64,
    pub last_education: i16,
    pub marital_status: bool,
    pub number_of_children: i32,
    pub home_ownership: bool,
    pub kk_url: String,
    pub ktp_url: String,
    pub status: String,
    pub is_approved: bool,
    pub is_rejected: bool,
    pub is_paid: bool,
    pub payment_token: Option<String>,
    pub payment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lending row joined with the borrower's username
#[derive(Debug, Clone, FromRow)]
pub struct LendingWithBorrowerModel {
    #[sqlx(flatten)]
    pub lending: LendingModel,
    pub username: String,
}
