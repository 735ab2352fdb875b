//! Payment gateway notification endpoint
//!
//! The gateway only reads the status code, so every outcome is a bare status.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use lendhub_service::dto::PaymentNotification;
use lendhub_service::WebhookService;
use tracing::{error, warn};

use crate::state::AppState;

/// POST /webhook/midtrans
pub async fn midtrans_notification(
    State(state): State<AppState>,
    payload: Result<Json<PaymentNotification>, JsonRejection>,
) -> StatusCode {
    let Json(notification) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Unreadable payment notification");
            return StatusCode::BAD_REQUEST;
        }
    };

    match WebhookService::new(state.service_context())
        .reconcile(notification)
        .await
    {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                error!(error = %e, "Payment notification could not be applied");
            }
            status
        }
    }
}
