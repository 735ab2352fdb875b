//! Route definitions
//!
//! All API routes are mounted under /api/v1 in three groups: public routes,
//! admin routes and borrower routes, each behind its own role gate.

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::extractors::MAX_UPLOAD_BYTES;
use crate::handlers::{
    analytics, auth, businesses, health, lendings, orders, payments, products, users, webhook,
};
use crate::middleware::role_gate;
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes(state))
}

/// Root-level heartbeat and health routes (merged after the middleware stack, so not rate limited)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(admin_routes().route_layer(from_fn_with_state(state.admin_gate(), role_gate)))
        .merge(borrower_routes().route_layer(from_fn_with_state(state.borrower_gate(), role_gate)))
}

/// Routes reachable without a session
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", get(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/public/product", get(products::search_products))
        .route("/lending/user/register", post(users::register_borrower))
        .route("/webhook/midtrans", post(webhook::midtrans_notification))
}

/// Administration routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/user",
            get(users::list_users)
                .post(users::create_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/business",
            get(businesses::search_businesses)
                .post(businesses::create_business)
                .patch(businesses::update_business)
                .delete(businesses::delete_business),
        )
        .route(
            "/product",
            get(products::search_products)
                .post(products::create_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/product/image",
            post(products::upload_product_image)
                .delete(products::delete_product_image)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/order",
            get(orders::list_orders)
                .post(orders::create_order)
                .patch(orders::update_order)
                .delete(orders::delete_order),
        )
        .route("/lending/admin/proposal", get(lendings::list_proposals))
        .route("/lending/admin/proposal-predict", get(lendings::predict_proposal))
        .route("/lending/admin/proposal-approve", post(lendings::approve_proposal))
        .route("/lending/admin/proposal-reject", post(lendings::reject_proposal))
        .route("/lending/admin/make-payment", post(payments::make_payment))
        .route("/lending/admin/payment-status", get(payments::payment_status))
        .route("/analytics/summary", get(analytics::summary))
}

/// Borrower routes; handlers receive the caller's identity
fn borrower_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/lending/user/document",
            post(lendings::upload_document).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/lending/user/proposal",
            get(lendings::list_own_proposals).post(lendings::submit_proposal),
        )
}
