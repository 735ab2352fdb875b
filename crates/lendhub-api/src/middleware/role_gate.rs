//! Role gate
//!
//! Guards a group of routes with the `access` cookie: the token must verify,
//! be younger than the access window and carry every required role.
//! Rejections are bare status codes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use lendhub_common::{AuthError, JwtService};
use lendhub_core::{Role, RoleSet};
use lendhub_service::authorize;
use tracing::debug;

use crate::cookies::ACCESS_COOKIE;
use crate::extractors::AuthUser;

/// Gate configuration for one route group
#[derive(Clone)]
pub struct RoleGate {
    jwt: Arc<JwtService>,
    window_minutes: i64,
    required: RoleSet,
    propagate_identity: bool,
}

impl RoleGate {
    /// A gate that only asks for a valid, fresh token
    pub fn new(jwt: Arc<JwtService>, window_minutes: i64) -> Self {
        Self {
            jwt,
            window_minutes,
            required: RoleSet::new(),
            propagate_identity: false,
        }
    }

    pub fn require(mut self, role: Role) -> Self {
        self.required.insert(role);
        self
    }

    /// Attach an [`AuthUser`] to admitted requests
    pub fn with_identity(mut self) -> Self {
        self.propagate_identity = true;
        self
    }
}

impl std::fmt::Debug for RoleGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleGate")
            .field("required", &self.required)
            .field("propagate_identity", &self.propagate_identity)
            .finish_non_exhaustive()
    }
}

/// Middleware function; install with `from_fn_with_state(gate, role_gate)`
pub async fn role_gate(State(gate): State<RoleGate>, mut request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let Some(token) = jar.get(ACCESS_COOKIE).map(|c| c.value().to_string()) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let claims = match authorize(&gate.jwt, gate.window_minutes, &token, &gate.required) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(reason = %e, "Role gate rejected request");
            let status = match e {
                AuthError::Forbidden => StatusCode::FORBIDDEN,
                _ => StatusCode::UNAUTHORIZED,
            };
            return status.into_response();
        }
    };

    if gate.propagate_identity {
        request.extensions_mut().insert(AuthUser {
            user_id: claims.uid,
            roles: claims.roles,
        });
    }

    next.run(request).await
}
