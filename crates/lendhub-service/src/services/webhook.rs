//! Payment notification reconciliation
//!
//! The gateway pushes a notification for every transaction state change.
//! Notifications are authenticated by their SHA-512 signature, mapped back to
//! a lending through the order id and applied idempotently: replaying a
//! notification writes the same values again.

use lendhub_common::AuthError;
use lendhub_core::{DomainError, Lending, PaymentOutcome};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::PaymentNotification;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Webhook reconciler
pub struct WebhookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebhookService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a payment notification to its lending
    ///
    /// A notification for a lending that no longer exists is accepted and
    /// changes nothing.
    #[instrument(
        skip(self, notification),
        fields(
            order_id = %notification.order_id,
            transaction_status = %notification.transaction_status,
        )
    )]
    pub async fn reconcile(&self, notification: PaymentNotification) -> ServiceResult<()> {
        notification.validate()?;

        let authentic = self.ctx.signature_verifier().verify(
            &notification.order_id,
            &notification.status_code,
            &notification.gross_amount,
            &notification.signature_key,
        );
        if !authentic {
            warn!("Payment notification signature mismatch");
            return Err(AuthError::InvalidSignature.into());
        }

        let lending_id =
            Lending::id_from_order_id(&notification.order_id, &self.ctx.settings().order_prefix)
                .ok_or(DomainError::InvalidId("order"))?;

        let outcome = PaymentOutcome::classify(
            &notification.transaction_status,
            notification.fraud_status.as_deref(),
        );
        let status = notification.transaction_status.as_str();
        let rows = match outcome {
            PaymentOutcome::Paid => self.ctx.lending_repo().mark_paid(lending_id, status).await?,
            PaymentOutcome::StatusOnly => {
                self.ctx.lending_repo().set_status(lending_id, status).await?
            }
        };

        info!(%lending_id, ?outcome, rows, "Payment notification applied");
        Ok(())
    }
}
