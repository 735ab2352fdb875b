//! Order service

use lendhub_core::{DomainError, Order};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateOrderRequest, OrderResponse, UpdateOrderRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Order service
pub struct OrderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrderService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All orders with product name and computed profit
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<OrderResponse>> {
        let orders = self.ctx.order_repo().list().await?;
        if orders.is_empty() {
            return Err(DomainError::NoResults("order").into());
        }
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(product_id = %request.product_id))]
    pub async fn create(&self, request: CreateOrderRequest) -> ServiceResult<Uuid> {
        let order = Order::new(
            Uuid::new_v4(),
            request.product_id,
            request.quantity,
            request.commission,
        );
        self.ctx.order_repo().create(&order).await?;

        info!(order_id = %order.id, "Order created");
        Ok(order.id)
    }

    #[instrument(skip(self, request), fields(order_id = %request.id))]
    pub async fn update(&self, request: UpdateOrderRequest) -> ServiceResult<()> {
        let order = Order::new(
            request.id,
            request.product_id,
            request.quantity,
            request.commission,
        );
        self.ctx.order_repo().update(&order).await?;

        info!("Order updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.order_repo().delete(id).await?;
        info!("Order deleted");
        Ok(())
    }
}
