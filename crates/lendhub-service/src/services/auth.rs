//! Authentication service
//!
//! Handles login, access token refresh, logout, access token checks and the
//! bootstrap administrator.

use std::time::Duration;

use lendhub_common::auth::{generate_token_id, hash_password, verify_password};
use lendhub_common::{AuthError, Claims, JwtService};
use lendhub_core::{RefreshSession, RoleSet};
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Delay applied to every failed login
const LOGIN_FAILURE_DELAY: Duration = Duration::from_millis(55);

/// Verify an access token, its freshness and the roles it must carry
pub fn authorize(
    jwt: &JwtService,
    window_minutes: i64,
    token: &str,
    required: &RoleSet,
) -> Result<Claims, AuthError> {
    let claims = jwt.verify(token)?;

    if !claims.is_fresh(window_minutes) {
        return Err(AuthError::Expired);
    }
    if !claims.roles.contains_all(required) {
        return Err(AuthError::Forbidden);
    }

    Ok(claims)
}

/// Everything a successful login hands back to the transport layer
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub refresh_token: String,
    pub body: LoginResponse,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    ///
    /// Unknown usernames and wrong passwords fail the same way after the same delay.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginOutcome> {
        let credentials = self
            .ctx
            .user_repo()
            .find_credentials(&request.username)
            .await?;

        let user = match credentials {
            Some(c) if verify_password(&request.password, &c.password_hash) => c.user,
            _ => {
                warn!("Login failed");
                tokio::time::sleep(LOGIN_FAILURE_DELAY).await;
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let session = RefreshSession {
            uid: user.id,
            jti: generate_token_id(),
            roles: user.roles(),
        };
        let refresh_token = self.ctx.session_store().create(&session).await?;
        let access_token = self
            .ctx
            .jwt_service()
            .issue(session.uid, &session.jti, &session.roles)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            access_token,
            refresh_token,
            body: LoginResponse {
                username: user.username,
                is_admin: user.is_admin,
            },
        })
    }

    /// Mint a new access token from a refresh session
    ///
    /// The session keeps its id and stays valid; the new token reuses the
    /// subject, token id and roles captured at login.
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<String> {
        let session = self
            .ctx
            .session_store()
            .redeem(refresh_token)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        let access_token = self
            .ctx
            .jwt_service()
            .issue(session.uid, &session.jti, &session.roles)?;

        info!(user_id = %session.uid, "Access token refreshed");
        Ok(access_token)
    }

    /// Revoke the presented refresh session, if any
    #[instrument(skip_all)]
    pub async fn logout(&self, refresh_token: Option<&str>) -> ServiceResult<()> {
        if let Some(refresh) = refresh_token.filter(|r| !r.is_empty()) {
            self.ctx.session_store().revoke(refresh).await?;
            info!("Refresh session revoked");
        }
        Ok(())
    }

    /// Check an access token and the roles it must carry
    ///
    /// Signature and structure failures, as well as a token older than the
    /// access window, are `401`; missing roles are `403`.
    pub fn authorize(&self, token: &str, required: &RoleSet) -> Result<Claims, AuthError> {
        authorize(
            self.ctx.jwt_service(),
            self.ctx.settings().access_window_minutes,
            token,
            required,
        )
    }

    /// Create or reset the bootstrap administrator
    #[instrument(skip(self, password))]
    pub async fn ensure_admin(&self, username: &str, password: &str) -> ServiceResult<()> {
        let password_hash = hash_password(password)?;
        self.ctx
            .user_repo()
            .upsert_admin(username, &password_hash)
            .await?;

        info!("Admin account ready");
        Ok(())
    }
}
