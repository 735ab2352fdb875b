//! Authenticated identity extractor
//!
//! The role gate verifies the access cookie and, on routes that ask for it,
//! stores the caller's identity in the request extensions.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use lendhub_common::AuthError;
use lendhub_core::RoleSet;
use uuid::Uuid;

use crate::response::ApiError;

/// Identity attached by the role gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub roles: RoleSet,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::App(AuthError::Missing.into()))
    }
}
