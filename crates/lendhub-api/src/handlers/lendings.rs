//! Lending handlers
//!
//! Borrower routes receive the caller's identity from the role gate; admin
//! routes address proposals by `?id=`.

use axum::{extract::State, http::StatusCode, Json};
use lendhub_service::dto::{
    AdminProposalResponse, CreateProposalRequest, FileResponse, PredictionResponse,
    ProposalResponse,
};
use lendhub_service::LendingService;

use crate::extractors::{AuthUser, IdQuery, UploadedFile, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /lending/user/document
pub async fn upload_document(
    State(state): State<AppState>,
    _auth: AuthUser,
    file: UploadedFile,
) -> ApiResult<Created<Json<FileResponse>>> {
    let stored = LendingService::new(state.service_context())
        .upload_document(&file.file_name, file.content_type.as_deref(), file.bytes)
        .await?;
    Ok(Created(Json(stored)))
}

/// POST /lending/user/proposal
pub async fn submit_proposal(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProposalRequest>,
) -> ApiResult<Created<Json<ProposalResponse>>> {
    let proposal = LendingService::new(state.service_context())
        .submit(auth.user_id, request)
        .await?;
    Ok(Created(Json(proposal)))
}

/// GET /lending/user/proposal
pub async fn list_own_proposals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ProposalResponse>>> {
    let proposals = LendingService::new(state.service_context())
        .list_own(auth.user_id)
        .await?;
    Ok(Json(proposals))
}

/// GET /lending/admin/proposal
pub async fn list_proposals(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AdminProposalResponse>>> {
    let proposals = LendingService::new(state.service_context()).list_all().await?;
    Ok(Json(proposals))
}

/// GET /lending/admin/proposal-predict?id=
pub async fn predict_proposal(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<Json<PredictionResponse>> {
    let prediction = LendingService::new(state.service_context())
        .predict(id)
        .await?;
    Ok(Json(prediction))
}

/// POST /lending/admin/proposal-approve?id=
pub async fn approve_proposal(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<StatusCode> {
    LendingService::new(state.service_context()).approve(id).await?;
    Ok(StatusCode::OK)
}

/// POST /lending/admin/proposal-reject?id=
pub async fn reject_proposal(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<StatusCode> {
    LendingService::new(state.service_context()).reject(id).await?;
    Ok(StatusCode::OK)
}
