//! # lendhub-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_refresh_string, generate_token_id, hash_password, verify_password, Claims,
    JwtService,
};
pub use config::{
    AdminConfig, AppConfig, AppSettings, BlobConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, HttpClientConfig, JwtConfig, PaymentConfig, PredictorConfig, RateLimitConfig,
    RedisConfig, ServerConfig,
};
pub use error::{AppError, AppResult, AuthError, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
