//! Database models - SQLx-compatible structs for PostgreSQL tables

mod business;
mod lending;
mod order;
mod product;
mod user;

pub use business::BusinessModel;
pub use lending::{LendingModel, LendingWithBorrowerModel};
pub use order::{OrderListingModel, OrderModel};
pub use product::{ProductImageModel, ProductListingModel, ProductModel};
pub use user::UserModel;
