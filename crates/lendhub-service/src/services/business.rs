//! Business catalog service

use lendhub_core::{Business, DomainError};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{BusinessResponse, CreateBusinessRequest, UpdateBusinessRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Business service
pub struct BusinessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BusinessService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Businesses whose name contains `query`
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<BusinessResponse>> {
        let businesses = self.ctx.business_repo().search(query).await?;
        if businesses.is_empty() {
            return Err(DomainError::NoResults("business").into());
        }
        Ok(businesses.into_iter().map(BusinessResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateBusinessRequest) -> ServiceResult<BusinessResponse> {
        let business = Business::new(
            Uuid::new_v4(),
            request.name,
            request.address,
            request.phone_number,
        );
        self.ctx.business_repo().create(&business).await?;

        info!(business_id = %business.id, "Business created");
        Ok(BusinessResponse::from(business))
    }

    #[instrument(skip(self, request), fields(business_id = %request.id))]
    pub async fn update(&self, request: UpdateBusinessRequest) -> ServiceResult<BusinessResponse> {
        let business = Business::new(
            request.id,
            request.name,
            request.address,
            request.phone_number,
        );
        self.ctx.business_repo().update(&business).await?;

        info!("Business updated");
        Ok(BusinessResponse::from(business))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.business_repo().delete(id).await?;
        info!("Business deleted");
        Ok(())
    }
}
