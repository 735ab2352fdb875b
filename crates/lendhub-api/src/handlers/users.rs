//! User administration and borrower sign-up

use axum::{extract::State, http::StatusCode, Json};
use lendhub_service::dto::{
    CreateUserRequest, RegisterBorrowerRequest, UpdateUserRequest, UserResponse,
};
use lendhub_service::UserService;

use crate::extractors::{IdQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /auth/user
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::new(state.service_context()).list().await?;
    Ok(Json(users))
}

/// POST /auth/user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let user = UserService::new(state.service_context()).create(request).await?;
    Ok(Created(Json(user)))
}

/// PATCH /auth/user
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<StatusCode> {
    UserService::new(state.service_context()).update(request).await?;
    Ok(StatusCode::OK)
}

/// DELETE /auth/user?id=
pub async fn delete_user(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<NoContent> {
    UserService::new(state.service_context()).delete(id).await?;
    Ok(NoContent)
}

/// Borrower self-registration
///
/// POST /lending/user/register
pub async fn register_borrower(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterBorrowerRequest>,
) -> ApiResult<StatusCode> {
    UserService::new(state.service_context())
        .register_borrower(request)
        .await?;
    Ok(StatusCode::CREATED)
}
