//! Test fixtures and data generators
//!
//! Request bodies with unique names, and the response shapes tests read back.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short unique suffix for names with store-level uniqueness
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Borrower sign-up, also usable as a login body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            username: format!("borrower{}", unique_suffix()),
            password: "Borrower123!".to_string(),
        }
    }
}

/// Admin-created account
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl CreateUserRequest {
    pub fn unique(is_admin: bool) -> Self {
        Self {
            username: format!("staff{}", unique_suffix()),
            password: "Staff123!".to_string(),
            is_admin,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub address: String,
    pub phone_number: String,
}

impl CreateBusinessRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Warung {}", unique_suffix()),
            address: "Jl. Merdeka 1".to_string(),
            phone_number: "081234567890".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub business_id: Uuid,
    pub price: f64,
}

impl CreateProductRequest {
    pub fn for_business(business_id: Uuid) -> Self {
        Self {
            name: format!("Kopi {}", unique_suffix()),
            description: "Ground coffee, 250g".to_string(),
            business_id,
            price: 45_000.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub business_name: String,
    pub price: f64,
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderRequest {
    pub product_id: Uuid,
    pub quantity: i32,
    pub commission: i32,
}

#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub commission: i32,
    pub profit: f64,
}

/// Body of a 201 for resources addressed by id
#[derive(Debug, Deserialize)]
pub struct CreatedId {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ProposalRequest {
    pub amount: f64,
    pub interest_rate: i32,
    pub tenor: i32,
    pub age: i32,
    pub gender: bool,
    pub income: f64,
    pub last_education: i16,
    pub marital_status: bool,
    pub number_of_children: i32,
    pub has_house: bool,
    pub kk_url: String,
    pub ktp_url: String,
}

impl ProposalRequest {
    pub fn sample() -> Self {
        Self {
            amount: 5_000_000.0,
            interest_rate: 12,
            tenor: 12,
            age: 31,
            gender: true,
            income: 7_500_000.0,
            last_education: 2,
            marital_status: true,
            number_of_children: 1,
            has_house: false,
            kk_url: "kk-scan.jpg".to_string(),
            ktp_url: "ktp-scan.jpg".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProposalResponse {
    pub id: Uuid,
    pub amount: f64,
    pub gender: String,
    pub last_education: String,
    pub status: String,
    pub is_paid: bool,
}

#[derive(Debug, Deserialize)]
pub struct AdminProposalResponse {
    pub id: Uuid,
    pub username: String,
    pub is_approved: bool,
    pub is_rejected: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsSummary {
    pub total_users: i64,
    pub total_businesses: i64,
    pub awaiting_approval: i64,
}
