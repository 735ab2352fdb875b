//! Business handlers

use axum::{extract::State, Json};
use lendhub_service::dto::{BusinessResponse, CreateBusinessRequest, UpdateBusinessRequest};
use lendhub_service::BusinessService;

use crate::extractors::{IdQuery, SearchQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /business?q=
pub async fn search_businesses(
    State(state): State<AppState>,
    SearchQuery(q): SearchQuery,
) -> ApiResult<Json<Vec<BusinessResponse>>> {
    let businesses = BusinessService::new(state.service_context()).search(&q).await?;
    Ok(Json(businesses))
}

/// POST /business
pub async fn create_business(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBusinessRequest>,
) -> ApiResult<Created<Json<BusinessResponse>>> {
    let business = BusinessService::new(state.service_context())
        .create(request)
        .await?;
    Ok(Created(Json(business)))
}

/// PATCH /business
pub async fn update_business(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateBusinessRequest>,
) -> ApiResult<Json<BusinessResponse>> {
    let business = BusinessService::new(state.service_context())
        .update(request)
        .await?;
    Ok(Json(business))
}

/// DELETE /business?id=
pub async fn delete_business(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<NoContent> {
    BusinessService::new(state.service_context()).delete(id).await?;
    Ok(NoContent)
}
