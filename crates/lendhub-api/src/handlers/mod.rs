//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod analytics;
pub mod auth;
pub mod businesses;
pub mod health;
pub mod lendings;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;
pub mod webhook;
