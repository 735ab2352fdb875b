//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod analytics;
pub mod auth;
pub mod business;
pub mod context;
pub mod error;
pub mod health;
pub mod lending;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
pub mod webhook;

// Re-export all services for convenience
pub use analytics::AnalyticsService;
pub use auth::{authorize, AuthService, LoginOutcome};
pub use business::BusinessService;
pub use context::{ServiceContext, ServiceContextBuilder, ServiceSettings};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use lending::LendingService;
pub use order::OrderService;
pub use payment::PaymentService;
pub use product::ProductService;
pub use user::UserService;
pub use webhook::WebhookService;
