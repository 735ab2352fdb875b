//! Dashboard counters

use tracing::instrument;

use crate::dto::AnalyticsSummary;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Analytics service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> ServiceResult<AnalyticsSummary> {
        let (total_users, total_businesses, awaiting_approval) = tokio::try_join!(
            self.ctx.user_repo().count(),
            self.ctx.business_repo().count(),
            self.ctx.lending_repo().count_awaiting_approval(),
        )?;

        Ok(AnalyticsSummary {
            total_users,
            total_businesses,
            awaiting_approval,
        })
    }
}
