//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Auth Responses
// ============================================================================

/// Body returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub username: String,
    pub is_admin: bool,
}

/// Account as listed to administrators
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub updated_on: DateTime<Utc>,
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub business_id: Uuid,
    pub business_name: String,
    pub price: f64,
    pub images: Vec<String>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub commission: i32,
    pub profit: f64,
    pub updated_on: DateTime<Utc>,
}

/// Name a file was stored under in the blob store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResponse {
    pub filename: String,
}

// ============================================================================
// Lending Responses
// ============================================================================

/// Proposal as shown to the borrower who submitted it
#[derive(Debug, Clone, Serialize)]
pub struct ProposalResponse {
    pub id: Uuid,
    pub amount: f64,
    pub interest_rate: i32,
    pub tenor: i32,
    pub age: i32,
    pub gender: &'static str,
    pub income: f64,
    pub last_education: &'static str,
    pub marital_status: &'static str,
    pub number_of_children: i32,
    pub has_house: &'static str,
    pub kk_url: String,
    pub ktp_url: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    pub is_paid: bool,
}

/// Proposal as shown to administrators
#[derive(Debug, Clone, Serialize)]
pub struct AdminProposalResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub amount: f64,
    pub interest_rate: i32,
    pub tenor: i32,
    pub age: i32,
    pub gender: &'static str,
    pub income: f64,
    pub last_education: &'static str,
    pub marital_status: &'static str,
    pub number_of_children: i32,
    pub has_house: &'static str,
    pub kk_url: String,
    pub ktp_url: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    pub is_approved: bool,
    pub is_rejected: bool,
    pub is_paid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResponse {
    pub predictions: Vec<String>,
}

// ============================================================================
// Analytics Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSummary {
    pub total_users: i64,
    pub total_businesses: i64,
    pub awaiting_approval: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true, true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");
        assert_eq!(ready.checks.redis, "healthy");

        let not_ready = ReadinessResponse::ready(true, false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.redis, "unhealthy");
    }

    #[test]
    fn test_login_response_wire_names() {
        let body = serde_json::to_value(LoginResponse {
            username: "alice".to_string(),
            is_admin: false,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "username": "alice", "is_admin": false }));
    }
}
