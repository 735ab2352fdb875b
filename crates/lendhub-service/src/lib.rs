//! # lendhub-service
//!
//! Application layer: one service per aggregate, each borrowing the shared
//! [`ServiceContext`], plus the request and response DTOs the API speaks.

pub mod dto;
pub mod services;

pub use services::{
    authorize, AnalyticsService, AuthService, BusinessService, HealthService, LendingService,
    LoginOutcome, OrderService, PaymentService, ProductService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ServiceSettings, UserService,
    WebhookService,
};

#[cfg(test)]
pub(crate) mod testing;
