//! Authentication handlers
//!
//! Login issues the session cookies, refresh mints a new access cookie and
//! logout revokes the refresh session.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use lendhub_common::AuthError;
use lendhub_service::dto::{LoginRequest, LoginResponse};
use lendhub_service::AuthService;

use crate::cookies::{access_cookie, refresh_cookie, removal_cookies, REFRESH_COOKIE};
use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let outcome = AuthService::new(state.service_context()).login(request).await?;

    let jar = jar
        .add(access_cookie(outcome.access_token))
        .add(refresh_cookie(outcome.refresh_token));
    Ok((jar, Json(outcome.body)))
}

/// Mint a new access token from the refresh cookie
///
/// GET /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, StatusCode)> {
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| ApiError::App(AuthError::InvalidRefreshToken.into()))?;

    let access_token = AuthService::new(state.service_context())
        .refresh(&refresh_token)
        .await?;

    Ok((jar.add(access_cookie(access_token)), StatusCode::OK))
}

/// Revoke the refresh session and clear both cookies
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, NoContent)> {
    let refresh_token = jar.get(REFRESH_COOKIE).map(|c| c.value().to_string());
    AuthService::new(state.service_context())
        .logout(refresh_token.as_deref())
        .await?;

    let jar = removal_cookies()
        .into_iter()
        .fold(jar, |jar, cookie| jar.add(cookie));
    Ok((jar, NoContent))
}
