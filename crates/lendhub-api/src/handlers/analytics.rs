//! Dashboard analytics

use axum::{extract::State, Json};
use lendhub_service::dto::AnalyticsSummary;
use lendhub_service::AnalyticsService;

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /analytics/summary
pub async fn summary(State(state): State<AppState>) -> ApiResult<Json<AnalyticsSummary>> {
    let summary = AnalyticsService::new(state.service_context()).summary().await?;
    Ok(Json(summary))
}
