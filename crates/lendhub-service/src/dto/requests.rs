//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    // No upper bound: an unknown long name fails like any other bad credential
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Admin-created account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    #[serde(default)]
    pub is_admin: bool,
}

/// Update an account by username. An absent or empty password keeps the old one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub is_admin: bool,
}

/// Borrower self-registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterBorrowerRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

// ============================================================================
// Business Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBusinessRequest {
    #[validate(length(min = 1, max = 32, message = "name must be 1-32 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "address must be 1-255 characters"))]
    pub address: String,

    #[validate(length(min = 1, max = 15, message = "phone_number must be 1-15 characters"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBusinessRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 32, message = "name must be 1-32 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "address must be 1-255 characters"))]
    pub address: String,

    #[validate(length(min = 1, max = 15, message = "phone_number must be 1-15 characters"))]
    pub phone_number: String,
}

// ============================================================================
// Product Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    pub business_id: Uuid,

    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    pub business_id: Uuid,

    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,
}

// ============================================================================
// Order Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    pub product_id: Uuid,

    #[validate(range(min = 1, message = "quantity must be greater than 0"))]
    pub quantity: i32,

    #[validate(range(min = 0, max = 100, message = "commission must be between 0 and 100"))]
    pub commission: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOrderRequest {
    pub id: Uuid,

    pub product_id: Uuid,

    #[validate(range(min = 1, message = "quantity must be greater than 0"))]
    pub quantity: i32,

    #[validate(range(min = 0, max = 100, message = "commission must be between 0 and 100"))]
    pub commission: i32,
}

// ============================================================================
// Lending Requests
// ============================================================================

/// Lending proposal submitted by a borrower. Document URLs are blob names
/// returned by the document upload endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProposalRequest {
    #[validate(range(exclusive_min = 0.0, message = "amount must be greater than 0"))]
    pub amount: f64,

    #[validate(range(min = 0, max = 100, message = "interest_rate must be between 0 and 100"))]
    pub interest_rate: i32,

    #[validate(range(min = 1, message = "tenor must be at least 1 month"))]
    pub tenor: i32,

    #[validate(range(min = 17, max = 120, message = "age must be between 17 and 120"))]
    pub age: i32,

    /// `true` = female
    pub gender: bool,

    #[validate(range(min = 0.0, message = "income cannot be negative"))]
    pub income: f64,

    #[validate(range(min = 0, max = 4, message = "last_education must be between 0 and 4"))]
    pub last_education: i16,

    /// `true` = married
    pub marital_status: bool,

    #[validate(range(min = 0, message = "number_of_children cannot be negative"))]
    pub number_of_children: i32,

    /// `true` = owns a house
    pub has_house: bool,

    #[validate(length(min = 1, message = "kk_url is required"))]
    pub kk_url: String,

    #[validate(length(min = 1, message = "ktp_url is required"))]
    pub ktp_url: String,
}

// ============================================================================
// Payment Notification
// ============================================================================

/// Notification pushed by the payment gateway. Every field except
/// `fraud_status` is mandatory; a missing field decodes as empty and fails
/// validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PaymentNotification {
    #[serde(default)]
    #[validate(length(min = 1, message = "transaction_status is required"))]
    pub transaction_status: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "status_code is required"))]
    pub status_code: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "signature_key is required"))]
    pub signature_key: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "order_id is required"))]
    pub order_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "gross_amount is required"))]
    pub gross_amount: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "payment_type is required"))]
    pub payment_type: String,

    /// Absent for over-the-counter payments
    #[serde(default)]
    pub fraud_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_long_username() {
        let request = LoginRequest {
            username: "u".repeat(65),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_business_name_limit() {
        let request = CreateBusinessRequest {
            name: "x".repeat(33),
            address: "Jl. Merdeka".to_string(),
            phone_number: "0812".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_price_must_be_positive() {
        let request = CreateProductRequest {
            name: "Rice".to_string(),
            description: "5kg".to_string(),
            business_id: Uuid::new_v4(),
            price: 0.0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_commission_bounds() {
        let mut request = CreateOrderRequest {
            product_id: Uuid::new_v4(),
            quantity: 1,
            commission: 100,
        };
        assert!(request.validate().is_ok());
        request.commission = 101;
        assert!(request.validate().is_err());
        request.commission = 0;
        request.quantity = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_notification_missing_field_fails_validation() {
        let notification: PaymentNotification = serde_json::from_str(
            r#"{"transaction_status":"settlement","status_code":"200","order_id":"lend-1",
                "gross_amount":"1000.00","payment_type":"bank_transfer"}"#,
        )
        .unwrap();
        assert!(notification.signature_key.is_empty());

        let errors = notification.validate().unwrap_err();
        assert_eq!(
            crate::dto::validation_messages(&errors),
            vec!["signature_key is required".to_string()]
        );
    }
}
