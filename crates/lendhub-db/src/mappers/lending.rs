//! Lending model -> entity mappers

use lendhub_core::entities::{Lending, LendingWithBorrower};
use lendhub_core::error::DomainError;
use lendhub_core::value_objects::{
    BorrowerProfile, Education, Gender, HomeOwnership, LendingStatus, MaritalStatus,
};

use crate::models::{LendingModel, LendingWithBorrowerModel};

impl TryFrom<LendingModel> for Lending {
    type Error = DomainError;

    fn try_from(model: LendingModel) -> Result<Self, Self::Error> {
        Ok(Lending {
            id: model.id,
            user_id: model.user_id,
            amount: model.amount,
            interest_rate: model.interest_rate,
            tenor: model.tenor,
            profile: BorrowerProfile {
                age: model.age,
                gender: Gender::from_flag(model.gender),
                income: model.income,
                last_education: Education::try_from(model.last_education)?,
                marital_status: MaritalStatus::from_flag(model.marital_status),
                number_of_children: model.number_of_children,
                home_ownership: HomeOwnership::from_flag(model.home_ownership),
            },
            kk_url: model.kk_url,
            ktp_url: model.ktp_url,
            status: LendingStatus::from(model.status),
            is_approved: model.is_approved,
            is_rejected: model.is_rejected,
            is_paid: model.is_paid,
            payment_token: model.payment_token,
            payment_url: model.payment_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<LendingWithBorrowerModel> for LendingWithBorrower {
    type Error = DomainError;

    fn try_from(model: LendingWithBorrowerModel) -> Result<Self, Self::Error> {
        Ok(LendingWithBorrower {
            lending: Lending::try_from(model.lending)?,
            username: model.username,
        })
    }
}
