//! # lendhub-api
//!
//! REST API server built with Axum: cookie sessions, role-gated route groups
//! and the payment gateway webhook.

pub mod cookies;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
