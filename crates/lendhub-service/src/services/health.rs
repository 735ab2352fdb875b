//! Liveness and readiness probes

use tracing::warn;

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// Probe Postgres and Redis concurrently
    pub async fn readiness(&self) -> ReadinessResponse {
        let (database, redis) = tokio::join!(
            sqlx::query("SELECT 1").execute(self.ctx.pool()),
            self.ctx.redis_pool().health_check(),
        );

        if let Err(e) = &database {
            warn!(error = %e, "Database readiness check failed");
        }
        if let Err(e) = &redis {
            warn!(error = %e, "Redis readiness check failed");
        }

        ReadinessResponse::ready(database.is_ok(), redis.is_ok())
    }
}
