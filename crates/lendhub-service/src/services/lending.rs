//! Lending workflow: borrower documents and proposals, admin review and scoring

use lendhub_core::{
    BorrowerProfile, DomainError, Education, Gender, HomeOwnership, Lending, MaritalStatus,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    AdminProposalResponse, CreateProposalRequest, FileResponse, PredictionResponse,
    ProposalResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Lending service
pub struct LendingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LendingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a supporting document (family card or identity card scan)
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_document(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> ServiceResult<FileResponse> {
        let filename = self
            .ctx
            .blob_store()
            .upload(file_name, content_type, bytes)
            .await?;

        info!(file_name = %filename, "Document stored");
        Ok(FileResponse { filename })
    }

    /// Submit a new proposal for the signed-in borrower
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        user_id: Uuid,
        request: CreateProposalRequest,
    ) -> ServiceResult<ProposalResponse> {
        let profile = BorrowerProfile {
            age: request.age,
            gender: Gender::from_flag(request.gender),
            income: request.income,
            last_education: Education::try_from(request.last_education)?,
            marital_status: MaritalStatus::from_flag(request.marital_status),
            number_of_children: request.number_of_children,
            home_ownership: HomeOwnership::from_flag(request.has_house),
        };
        let lending = Lending::new(
            Uuid::new_v4(),
            user_id,
            request.amount,
            request.interest_rate,
            request.tenor,
            profile,
            request.kk_url,
            request.ktp_url,
        );

        self.ctx.lending_repo().create(&lending).await?;

        info!(lending_id = %lending.id, "Proposal submitted");
        Ok(ProposalResponse::from(lending))
    }

    /// Proposals submitted by one borrower
    #[instrument(skip(self))]
    pub async fn list_own(&self, user_id: Uuid) -> ServiceResult<Vec<ProposalResponse>> {
        let lendings = self.ctx.lending_repo().list_by_user(user_id).await?;
        if lendings.is_empty() {
            return Err(DomainError::NoResults("lending").into());
        }
        Ok(lendings.into_iter().map(ProposalResponse::from).collect())
    }

    /// Every proposal with its borrower's username
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<AdminProposalResponse>> {
        let lendings = self.ctx.lending_repo().list_all().await?;
        if lendings.is_empty() {
            return Err(DomainError::NoResults("lending").into());
        }
        Ok(lendings.into_iter().map(AdminProposalResponse::from).collect())
    }

    /// Score a proposal with the credit model
    #[instrument(skip(self))]
    pub async fn predict(&self, id: Uuid) -> ServiceResult<PredictionResponse> {
        let lending = self
            .ctx
            .lending_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("lending"))?;

        let predictions = self
            .ctx
            .credit_predictor()
            .predict(&lending.profile.features())
            .await?;

        Ok(PredictionResponse { predictions })
    }

    /// Approve a pending proposal. A decided proposal is reported as not found.
    #[instrument(skip(self))]
    pub async fn approve(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.lending_repo().approve(id).await?;
        info!("Proposal approved");
        Ok(())
    }

    /// Reject a pending proposal. A decided proposal is reported as not found.
    #[instrument(skip(self))]
    pub async fn reject(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.lending_repo().reject(id).await?;
        info!("Proposal rejected");
        Ok(())
    }
}
