//! Payment handlers for approved lendings

use axum::{extract::State, Json};
use lendhub_core::{PaymentIntent, TransactionStatusReport};
use lendhub_service::PaymentService;

use crate::extractors::IdQuery;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /lending/admin/make-payment?id=
pub async fn make_payment(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<Created<Json<PaymentIntent>>> {
    let intent = PaymentService::new(state.service_context())
        .make_payment(id)
        .await?;
    Ok(Created(Json(intent)))
}

/// GET /lending/admin/payment-status?id=
pub async fn payment_status(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<Json<TransactionStatusReport>> {
    let report = PaymentService::new(state.service_context())
        .payment_status(id)
        .await?;
    Ok(Json(report))
}
