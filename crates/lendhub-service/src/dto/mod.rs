//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateBusinessRequest, CreateOrderRequest, CreateProductRequest, CreateProposalRequest,
    CreateUserRequest, LoginRequest, PaymentNotification, RegisterBorrowerRequest,
    UpdateBusinessRequest, UpdateOrderRequest, UpdateProductRequest, UpdateUserRequest,
};

pub use responses::{
    AdminProposalResponse, AnalyticsSummary, BusinessResponse, FileResponse, HealthChecks,
    HealthResponse, LoginResponse, OrderResponse, PredictionResponse, ProductResponse,
    ProposalResponse, ReadinessResponse, UserResponse,
};

/// Flatten validation failures into client-facing messages, ordered by field
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect()
}
