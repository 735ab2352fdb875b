//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).
//! Everything the process needs is read once at startup; a missing required
//! variable is fatal.

use std::env;
use std::time::Duration;

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    pub blob: BlobConfig,
    pub predictor: PredictorConfig,
    pub payment: PaymentConfig,
    pub http_client: HttpClientConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_max_lifetime_secs")]
    pub max_lifetime_secs: u64,
    /// Directory of SQL migrations applied at startup
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Session token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Minutes an access token stays valid after it was issued
    #[serde(default = "default_access_window_minutes")]
    pub access_window_minutes: i64,
    /// Lifetime of a refresh session in the key-value store
    #[serde(default = "default_refresh_ttl_secs")]
    pub refresh_ttl_secs: u64,
}

/// Bootstrap administrator account
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,
    pub password: String,
}

/// Blob storage service
#[derive(Debug, Clone, Deserialize)]
pub struct BlobConfig {
    pub base_url: String,
    /// Value sent verbatim in the `Authorization` header
    pub authorization: String,
}

/// Credit prediction service
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    pub base_url: String,
}

/// Payment gateway
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    pub server_key: String,
    pub snap_base_url: String,
    pub core_api_base_url: String,
    /// Prefix of the order ids shown to the gateway (`{prefix}-{lending id}`)
    pub order_prefix: String,
    #[serde(default = "default_payment_expiry_days")]
    pub expiry_days: u32,
}

/// Outbound HTTP client settings shared by all external services
#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientConfig {
    #[serde(default = "default_external_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpClientConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_external_timeout_secs(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "lendhub".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    5
}

fn default_max_lifetime_secs() -> u64 {
    300
}

fn default_migrations_dir() -> String {
    "crates/lendhub-db/migrations".to_string()
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_access_window_minutes() -> i64 {
    3
}

fn default_refresh_ttl_secs() -> u64 {
    86_400 // 24 hours
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_payment_expiry_days() -> u32 {
    30
}

fn default_external_timeout_secs() -> u64 {
    15
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if required variables are missing or unparsable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        Ok(Self {
            app: AppSettings {
                name: vars.or("APP_NAME", default_app_name),
                env: vars
                    .get("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: vars.or("SERVER_HOST", default_host),
                port: vars.parse_or("SERVER_PORT", default_port)?,
                request_timeout_secs: vars
                    .parse_or("REQUEST_TIMEOUT_SECS", default_request_timeout_secs)?,
            },
            database: DatabaseConfig {
                url: vars.required("DATABASE_URL")?,
                max_connections: vars
                    .parse_or("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: vars
                    .parse_or("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                max_lifetime_secs: vars
                    .parse_or("DATABASE_MAX_LIFETIME_SECS", default_max_lifetime_secs)?,
                migrations_dir: vars.or("DATABASE_MIGRATIONS_DIR", default_migrations_dir),
            },
            redis: RedisConfig {
                url: vars.required("REDIS_URL")?,
                max_connections: vars
                    .parse_or("REDIS_MAX_CONNECTIONS", default_redis_max_connections)?,
            },
            jwt: JwtConfig {
                secret: vars.required("JWT_SECRET")?,
                access_window_minutes: vars
                    .parse_or("ACCESS_TOKEN_WINDOW_MINUTES", default_access_window_minutes)?,
                refresh_ttl_secs: vars
                    .parse_or("REFRESH_SESSION_TTL_SECS", default_refresh_ttl_secs)?,
            },
            admin: AdminConfig {
                username: vars.or("ADMIN_USERNAME", default_admin_username),
                password: vars.required("ADMIN_PASSWORD")?,
            },
            blob: BlobConfig {
                base_url: vars.required("BLOB_BASE_URL")?,
                authorization: vars.required("BLOB_AUTHORIZATION")?,
            },
            predictor: PredictorConfig {
                base_url: vars.required("ML_BASE_URL")?,
            },
            payment: PaymentConfig {
                server_key: vars.required("MIDTRANS_SERVER_KEY")?,
                snap_base_url: vars.required("MIDTRANS_SNAP_BASE_URL")?,
                core_api_base_url: vars.required("MIDTRANS_CORE_API_BASE_URL")?,
                order_prefix: vars.required("MIDTRANS_ORDER_PREFIX")?,
                expiry_days: vars
                    .parse_or("MIDTRANS_EXPIRY_DAYS", default_payment_expiry_days)?,
            },
            http_client: HttpClientConfig {
                timeout_secs: vars
                    .parse_or("EXTERNAL_HTTP_TIMEOUT_SECS", default_external_timeout_secs)?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: vars
                    .parse_or("RATE_LIMIT_REQUESTS_PER_SECOND", default_requests_per_second)?,
                burst: vars.parse_or("RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: vars
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Variable source with the lookups `from_lookup` needs
struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Non-empty value of `key`
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingVar(key))
    }

    fn or(&self, key: &str, default: fn() -> String) -> String {
        self.get(key).unwrap_or_else(default)
    }

    fn parse_or<T: std::str::FromStr>(
        &self,
        key: &'static str,
        default: fn() -> T,
    ) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
            None => Ok(default()),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
