//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - The full set of environment variables `AppConfig::from_env` reads
//!   (DATABASE_URL, REDIS_URL, JWT_SECRET, ADMIN_PASSWORD, BLOB_*, ML_BASE_URL,
//!   MIDTRANS_*). External services are only contacted by upload, prediction
//!   and payment routes, which these tests do not call.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, Session, TestServer, API,
};
use lendhub_integrations::SignatureVerifier;
use reqwest::StatusCode;

async fn server() -> Option<TestServer> {
    let config = test_config()?;
    Some(TestServer::start(config).await.expect("Failed to start server"))
}

/// Register a borrower and log them in
async fn borrower(server: &TestServer) -> (Credentials, Session) {
    let credentials = Credentials::unique();
    let response = server
        .post(&format!("{API}/lending/user/register"), &credentials)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let session = server
        .login(&credentials.username, &credentials.password)
        .await
        .unwrap();
    (credentials, session)
}

async fn submit_proposal(server: &TestServer, session: &Session) -> ProposalResponse {
    let response = server
        .post_auth(&format!("{API}/lending/user/proposal"), session, &ProposalRequest::sample())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_and_ping() {
    let Some(server) = server().await else { return };

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/ping").await.unwrap();
    assert_eq!(response.text().await.unwrap(), "pong");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_admin_login_sets_session_cookies() {
    let Some(server) = server().await else { return };

    let body = serde_json::json!({
        "username": server.config.admin.username,
        "password": server.config.admin.password,
    });
    let response = server.post(&format!("{API}/auth/login"), &body).await.unwrap();
    let session = Session::from_response(&response);
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(login.username, server.config.admin.username);
    assert!(login.is_admin);
    assert!(session.access.is_some());
    assert!(session.refresh.is_some());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let Some(server) = server().await else { return };

    for username in ["nobody-here".to_string(), "n".repeat(65)] {
        let body = serde_json::json!({ "username": username, "password": "wrong" });
        let response = server.post(&format!("{API}/auth/login"), &body).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": ["invalid username or password"] }));
    }
}

#[tokio::test]
async fn test_refresh_mints_new_access_cookie() {
    let Some(server) = server().await else { return };
    let mut session = server.login_admin().await.unwrap();

    let refresh_only = Session {
        access: None,
        refresh: session.refresh.clone(),
    };
    let response = server
        .get_auth(&format!("{API}/auth/refresh"), &refresh_only)
        .await
        .unwrap();
    let refreshed = Session::from_response(&response);
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(refreshed.access.is_some());

    session.access = refreshed.access;
    let response = server
        .get_auth(&format!("{API}/analytics/summary"), &session)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_session() {
    let Some(server) = server().await else { return };
    let session = server.login_admin().await.unwrap();

    let response = server
        .post_empty_auth(&format!("{API}/auth/logout"), &session)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("{API}/auth/refresh"), &session)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_role_gate() {
    let Some(server) = server().await else { return };

    let response = server.get(&format!("{API}/business")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.text().await.unwrap().is_empty());

    let (_, borrower) = borrower(&server).await;
    let response = server
        .get_auth(&format!("{API}/business"), &borrower)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.text().await.unwrap().is_empty());
}

// ============================================================================
// User Administration Tests
// ============================================================================

#[tokio::test]
async fn test_user_lifecycle() {
    let Some(server) = server().await else { return };
    let admin = server.login_admin().await.unwrap();
    let path = format!("{API}/auth/user");

    let request = CreateUserRequest::unique(false);
    let response = server.post_auth(&path, &admin, &request).await.unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.username, request.username);
    assert!(!created.is_admin);

    let response = server.post_auth(&path, &admin, &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let update = serde_json::json!({ "username": request.username, "is_admin": true });
    let response = server.patch_auth(&path, &admin, &update).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&path, &admin).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let updated = users.iter().find(|u| u.id == created.id).unwrap();
    assert!(updated.is_admin);

    let response = server
        .delete_auth(&format!("{path}?id={}", created.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_auth(&format!("{path}?id={}", created.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_bootstrap_admin_is_protected() {
    let Some(server) = server().await else { return };
    let admin = server.login_admin().await.unwrap();

    let update = serde_json::json!({
        "username": server.config.admin.username,
        "password": "hijacked",
        "is_admin": false,
    });
    let response = server
        .patch_auth(&format!("{API}/auth/user"), &admin, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Marketplace Tests
// ============================================================================

#[tokio::test]
async fn test_business_product_order_flow() {
    let Some(server) = server().await else { return };
    let admin = server.login_admin().await.unwrap();

    let business_request = CreateBusinessRequest::unique();
    let response = server
        .post_auth(&format!("{API}/business"), &admin, &business_request)
        .await
        .unwrap();
    let business: BusinessResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(business.name, business_request.name);

    let response = server
        .post_auth(&format!("{API}/business"), &admin, &business_request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let product_request = CreateProductRequest::for_business(business.id);
    let response = server
        .post_auth(&format!("{API}/product"), &admin, &product_request)
        .await
        .unwrap();
    let product: CreatedId = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("{API}/public/product?q={}", product_request.name))
        .await
        .unwrap();
    let listed: Vec<ProductResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, product.id);
    assert_eq!(listed[0].business_name, business.name);
    assert!(listed[0].images.is_empty());

    let order = CreateOrderRequest {
        product_id: product.id,
        quantity: 3,
        commission: 10,
    };
    let response = server
        .post_auth(&format!("{API}/order"), &admin, &order)
        .await
        .unwrap();
    let order_id: CreatedId = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth(&format!("{API}/order"), &admin).await.unwrap();
    let orders: Vec<OrderResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let placed = orders.iter().find(|o| o.id == order_id.id).unwrap();
    assert!((placed.profit - 13_500.0).abs() < f64::EPSILON);

    // The business is still referenced by its product
    let response = server
        .delete_auth(&format!("{API}/business?id={}", business.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    for path in [
        format!("{API}/order?id={}", order_id.id),
        format!("{API}/product?id={}", product.id),
        format!("{API}/business?id={}", business.id),
    ] {
        let response = server.delete_auth(&path, &admin).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }
}

#[tokio::test]
async fn test_product_with_unknown_business_conflicts() {
    let Some(server) = server().await else { return };
    let admin = server.login_admin().await.unwrap();

    let request = CreateProductRequest::for_business(uuid::Uuid::new_v4());
    let response = server
        .post_auth(&format!("{API}/product"), &admin, &request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": ["business id not found"] }));
}

// ============================================================================
// Lending Tests
// ============================================================================

#[tokio::test]
async fn test_proposal_review() {
    let Some(server) = server().await else { return };
    let admin = server.login_admin().await.unwrap();
    let (credentials, session) = borrower(&server).await;

    let proposal = submit_proposal(&server, &session).await;
    assert_eq!(proposal.status, "pending");
    assert_eq!(proposal.gender, "Perempuan");
    assert_eq!(proposal.last_education, "S1");

    let response = server
        .get_auth(&format!("{API}/lending/user/proposal"), &session)
        .await
        .unwrap();
    let own: Vec<ProposalResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(own.len(), 1);

    let response = server
        .get_auth(&format!("{API}/lending/admin/proposal"), &admin)
        .await
        .unwrap();
    let all: Vec<AdminProposalResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listed = all.iter().find(|p| p.id == proposal.id).unwrap();
    assert_eq!(listed.username, credentials.username);
    assert!(!listed.is_approved && !listed.is_rejected);

    let approve = format!("{API}/lending/admin/proposal-approve?id={}", proposal.id);
    let response = server.post_empty_auth(&approve, &admin).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Only pending proposals can be decided
    let response = server.post_empty_auth(&approve, &admin).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let reject = format!("{API}/lending/admin/proposal-reject?id={}", proposal.id);
    let response = server.post_empty_auth(&reject, &admin).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_invalid_proposal_is_rejected() {
    let Some(server) = server().await else { return };
    let (_, session) = borrower(&server).await;

    let mut request = ProposalRequest::sample();
    request.amount = 0.0;
    let response = server
        .post_auth(&format!("{API}/lending/user/proposal"), &session, &request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": ["amount must be greater than 0"] }));
}

// ============================================================================
// Webhook Tests
// ============================================================================

#[tokio::test]
async fn test_webhook_settlement_marks_paid_and_is_idempotent() {
    let Some(server) = server().await else { return };
    let (_, session) = borrower(&server).await;
    let proposal = submit_proposal(&server, &session).await;

    let verifier = SignatureVerifier::new(server.config.payment.server_key.clone());
    let order_id = format!("{}-{}", server.config.payment.order_prefix, proposal.id);
    let gross_amount = "5600000.00";
    let notification = serde_json::json!({
        "transaction_status": "settlement",
        "status_code": "200",
        "signature_key": verifier.sign(&order_id, "200", gross_amount),
        "order_id": order_id,
        "gross_amount": gross_amount,
        "payment_type": "bank_transfer",
        "fraud_status": "accept",
    });

    for _ in 0..2 {
        let response = server
            .post(&format!("{API}/webhook/midtrans"), &notification)
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();

        let response = server
            .get_auth(&format!("{API}/lending/user/proposal"), &session)
            .await
            .unwrap();
        let own: Vec<ProposalResponse> = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(own[0].is_paid);
        assert_eq!(own[0].status, "settlement");
    }
}

#[tokio::test]
async fn test_webhook_rejects_forged_signature() {
    let Some(server) = server().await else { return };
    let (_, session) = borrower(&server).await;
    let proposal = submit_proposal(&server, &session).await;

    let notification = serde_json::json!({
        "transaction_status": "settlement",
        "status_code": "200",
        "signature_key": "0".repeat(128),
        "order_id": format!("{}-{}", server.config.payment.order_prefix, proposal.id),
        "gross_amount": "5600000.00",
        "payment_type": "bank_transfer",
    });
    let response = server
        .post(&format!("{API}/webhook/midtrans"), &notification)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth(&format!("{API}/lending/user/proposal"), &session)
        .await
        .unwrap();
    let own: Vec<ProposalResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!own[0].is_paid);
    assert_eq!(own[0].status, "pending");
}

// ============================================================================
// Analytics Tests
// ============================================================================

#[tokio::test]
async fn test_analytics_summary_counts() {
    let Some(server) = server().await else { return };
    let admin = server.login_admin().await.unwrap();

    let response = server
        .get_auth(&format!("{API}/analytics/summary"), &admin)
        .await
        .unwrap();
    let summary: AnalyticsSummary = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(summary.total_users >= 1);
    assert!(summary.total_businesses >= 0);
    assert!(summary.awaiting_approval >= 0);
}
