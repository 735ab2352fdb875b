//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use lendhub_core::{
    Business, Lending, LendingWithBorrower, OrderListing, ProductListing, User,
};

use super::responses::{
    AdminProposalResponse, BusinessResponse, OrderResponse, ProductResponse, ProposalResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
            updated_on: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Catalog Mappers
// ============================================================================

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            id: business.id,
            name: business.name,
            address: business.address,
            phone_number: business.phone_number,
            updated_on: business.updated_at,
        }
    }
}

impl From<ProductListing> for ProductResponse {
    fn from(listing: ProductListing) -> Self {
        let product = listing.product;
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            business_id: product.business_id,
            business_name: listing.business_name,
            price: product.price,
            images: listing.images,
            updated_on: product.updated_at,
        }
    }
}

impl From<OrderListing> for OrderResponse {
    fn from(listing: OrderListing) -> Self {
        let profit = listing.profit();
        let order = listing.order;
        Self {
            id: order.id,
            product_id: order.product_id,
            product_name: listing.product_name,
            quantity: order.quantity,
            commission: order.commission,
            profit,
            updated_on: order.updated_at,
        }
    }
}

// ============================================================================
// Lending Mappers
// ============================================================================

impl From<Lending> for ProposalResponse {
    fn from(lending: Lending) -> Self {
        let profile = &lending.profile;
        Self {
            id: lending.id,
            amount: lending.amount,
            interest_rate: lending.interest_rate,
            tenor: lending.tenor,
            age: profile.age,
            gender: profile.gender.label(),
            income: profile.income,
            last_education: profile.last_education.label(),
            marital_status: profile.marital_status.label(),
            number_of_children: profile.number_of_children,
            has_house: profile.home_ownership.label(),
            status: lending.status.to_string(),
            kk_url: lending.kk_url,
            ktp_url: lending.ktp_url,
            payment_token: lending.payment_token,
            payment_url: lending.payment_url,
            is_paid: lending.is_paid,
        }
    }
}

impl From<LendingWithBorrower> for AdminProposalResponse {
    fn from(row: LendingWithBorrower) -> Self {
        let lending = row.lending;
        let profile = &lending.profile;
        Self {
            id: lending.id,
            user_id: lending.user_id,
            username: row.username,
            amount: lending.amount,
            interest_rate: lending.interest_rate,
            tenor: lending.tenor,
            age: profile.age,
            gender: profile.gender.label(),
            income: profile.income,
            last_education: profile.last_education.label(),
            marital_status: profile.marital_status.label(),
            number_of_children: profile.number_of_children,
            has_house: profile.home_ownership.label(),
            status: lending.status.to_string(),
            kk_url: lending.kk_url,
            ktp_url: lending.ktp_url,
            payment_token: lending.payment_token,
            payment_url: lending.payment_url,
            is_approved: lending.is_approved,
            is_rejected: lending.is_rejected,
            is_paid: lending.is_paid,
        }
    }
}
