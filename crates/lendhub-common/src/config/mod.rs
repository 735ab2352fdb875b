//! Configuration structs

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, BlobConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, HttpClientConfig, JwtConfig, PaymentConfig, PredictorConfig, RateLimitConfig,
    RedisConfig, ServerConfig,
};
