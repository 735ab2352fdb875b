//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context and configuration.

use std::sync::Arc;

use lendhub_common::AppConfig;
use lendhub_core::Role;
use lendhub_service::ServiceContext;

use crate::middleware::RoleGate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn gate(&self) -> RoleGate {
        RoleGate::new(
            self.service_context.jwt_service_arc(),
            self.service_context.settings().access_window_minutes,
        )
    }

    /// Gate for the administration routes
    pub fn admin_gate(&self) -> RoleGate {
        self.gate().require(Role::Admin)
    }

    /// Gate for borrower routes; handlers receive the caller's identity
    pub fn borrower_gate(&self) -> RoleGate {
        self.gate().require(Role::User).with_identity()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .finish()
    }
}
