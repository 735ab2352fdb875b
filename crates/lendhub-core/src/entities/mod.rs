//! Domain entities - core business objects

mod business;
mod lending;
mod order;
mod product;
mod session;
mod user;

pub use business::Business;
pub use lending::{Lending, LendingWithBorrower};
pub use order::{Order, OrderListing};
pub use product::{Product, ProductImage, ProductListing};
pub use session::RefreshSession;
pub use user::{Credentials, User};
