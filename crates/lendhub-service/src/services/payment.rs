//! Payment intents for approved lendings

use chrono::Utc;
use lendhub_core::{DomainError, Lending, PaymentIntent, PaymentIntentRequest, TransactionStatusReport};
use tracing::{info, instrument};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Payment service
pub struct PaymentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PaymentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find_lending(&self, id: Uuid) -> ServiceResult<Lending> {
        Ok(self
            .ctx
            .lending_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("lending"))?)
    }

    /// Open a hosted payment page for an approved lending
    ///
    /// The token and redirect URL are stored before the intent is returned.
    #[instrument(skip(self))]
    pub async fn make_payment(&self, id: Uuid) -> ServiceResult<PaymentIntent> {
        let lending = self.find_lending(id).await?;
        if !lending.is_payable() {
            return Err(DomainError::NotPayable.into());
        }

        let settings = self.ctx.settings();
        let request = PaymentIntentRequest {
            order_id: lending.order_id(&settings.order_prefix),
            gross_amount: lending.gross_amount(),
            expiry_start: Utc::now(),
            expiry_days: settings.payment_expiry_days,
        };

        let intent = self.ctx.payment_gateway().create_intent(&request).await?;
        self.ctx
            .lending_repo()
            .set_payment(id, &intent.token, &intent.redirect_url)
            .await?;

        info!(order_id = %request.order_id, gross_amount = request.gross_amount, "Payment intent created");
        Ok(intent)
    }

    /// Ask the gateway for the current transaction state of a lending
    #[instrument(skip(self))]
    pub async fn payment_status(&self, id: Uuid) -> ServiceResult<TransactionStatusReport> {
        let lending = self.find_lending(id).await?;
        let order_id = lending.order_id(&self.ctx.settings().order_prefix);

        Ok(self
            .ctx
            .payment_gateway()
            .transaction_status(&order_id)
            .await?)
    }
}
