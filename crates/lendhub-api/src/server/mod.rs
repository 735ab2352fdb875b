//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use lendhub_cache::{RedisPool, RedisSessionStore};
use lendhub_common::{AppConfig, AppError, JwtService};
use lendhub_db::{
    create_pool, run_migrations, PgBusinessRepository, PgLendingRepository, PgOrderRepository,
    PgProductRepository, PgUserRepository, PoolSettings,
};
use lendhub_integrations::{
    build_client, HttpBlobStore, HttpCreditPredictor, MidtransGateway, SignatureVerifier,
};
use lendhub_service::{AuthService, ServiceContextBuilder, ServiceSettings};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, MiddlewareSettings};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let settings = MiddlewareSettings {
        rate_limit: &config.rate_limit,
        cors: &config.cors,
        request_timeout: Duration::from_secs(config.api.request_timeout_secs),
        is_production: config.app.env.is_production(),
    };

    let router = apply_middleware(create_router(&state), &settings)?.merge(health_routes());
    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// Connects to PostgreSQL, applies pending migrations, wires the external
/// services and makes sure the bootstrap administrator exists.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolSettings::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool, Path::new(&config.database.migrations_dir))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(dir = %config.database.migrations_dir, "Migrations applied");

    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    let session_store = RedisSessionStore::with_ttl(redis_pool.clone(), config.jwt.refresh_ttl_secs);

    let http = build_client(&config.http_client)
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    let blob_store = HttpBlobStore::new(http.clone(), &config.blob);
    let credit_predictor = HttpCreditPredictor::new(http.clone(), &config.predictor);
    let payment_gateway = MidtransGateway::new(http, &config.payment)
        .map_err(|e| AppError::Config(e.to_string()))?;
    let signature_verifier = SignatureVerifier::new(config.payment.server_key.clone());

    let jwt_service =
        Arc::new(JwtService::new(&config.jwt.secret).map_err(|e| AppError::Config(e.to_string()))?);

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .redis_pool(redis_pool)
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .business_repo(Arc::new(PgBusinessRepository::new(pool.clone())))
        .product_repo(Arc::new(PgProductRepository::new(pool.clone())))
        .order_repo(Arc::new(PgOrderRepository::new(pool.clone())))
        .lending_repo(Arc::new(PgLendingRepository::new(pool)))
        .session_store(Arc::new(session_store))
        .blob_store(Arc::new(blob_store))
        .credit_predictor(Arc::new(credit_predictor))
        .payment_gateway(Arc::new(payment_gateway))
        .signature_verifier(signature_verifier)
        .jwt_service(jwt_service)
        .settings(ServiceSettings::from(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    AuthService::new(&service_context)
        .ensure_admin(&config.admin.username, &config.admin.password)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl-C or SIGTERM
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state)?;
    run_server(app, &addr).await
}
