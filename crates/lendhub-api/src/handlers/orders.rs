//! Order handlers

use axum::{extract::State, http::StatusCode, Json};
use lendhub_service::dto::{CreateOrderRequest, OrderResponse, UpdateOrderRequest};
use lendhub_service::OrderService;

use crate::extractors::{IdQuery, ValidatedJson};
use crate::response::{ApiResult, Created, CreatedId, NoContent};
use crate::state::AppState;

/// GET /order
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<OrderResponse>>> {
    let orders = OrderService::new(state.service_context()).list().await?;
    Ok(Json(orders))
}

/// POST /order
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<Created<Json<CreatedId>>> {
    let id = OrderService::new(state.service_context()).create(request).await?;
    Ok(Created(Json(CreatedId { id })))
}

/// PATCH /order
pub async fn update_order(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateOrderRequest>,
) -> ApiResult<StatusCode> {
    OrderService::new(state.service_context()).update(request).await?;
    Ok(StatusCode::OK)
}

/// DELETE /order?id=
pub async fn delete_order(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<NoContent> {
    OrderService::new(state.service_context()).delete(id).await?;
    Ok(NoContent)
}
