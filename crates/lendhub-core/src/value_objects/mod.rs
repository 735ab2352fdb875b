//! Value objects - immutable types that represent domain concepts

mod borrower;
mod payment;
mod role;

pub use borrower::{
    BorrowerProfile, CreditFeatures, Education, Gender, HomeOwnership, LendingStatus,
    MaritalStatus,
};
pub use payment::{PaymentIntent, PaymentIntentRequest, PaymentOutcome, TransactionStatusReport};
pub use role::{Role, RoleParseError, RoleSet};
