//! Order model -> entity mappers

use lendhub_core::entities::{Order, OrderListing};

use crate::models::{OrderListingModel, OrderModel};

impl From<OrderModel> for Order {
    fn from(model: OrderModel) -> Self {
        Order {
            id: model.id,
            product_id: model.product_id,
            quantity: model.quantity,
            commission: model.commission,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<OrderListingModel> for OrderListing {
    fn from(model: OrderListingModel) -> Self {
        OrderListing {
            order: Order::from(model.order),
            product_name: model.product_name,
            price: model.price,
        }
    }
}
