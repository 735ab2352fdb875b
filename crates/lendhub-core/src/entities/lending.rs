//! Lending entity - a borrower's loan proposal and its payment state

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{BorrowerProfile, LendingStatus};

/// Lending proposal submitted by a borrower
///
/// `is_approved` and `is_rejected` are never both set; the repository enforces
/// this with conditional updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Lending {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    /// Interest rate in percent over the whole tenor
    pub interest_rate: i32,
    /// Tenor in months
    pub tenor: i32,
    pub profile: BorrowerProfile,
    pub kk_url: String,
    pub ktp_url: String,
    pub status: LendingStatus,
    pub is_approved: bool,
    pub is_rejected: bool,
    pub is_paid: bool,
    pub payment_token: Option<String>,
    pub payment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lending {
    /// Create a pending proposal
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        amount: f64,
        interest_rate: i32,
        tenor: i32,
        profile: BorrowerProfile,
        kk_url: String,
        ktp_url: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            amount,
            interest_rate,
            tenor,
            profile,
            kk_url,
            ktp_url,
            status: LendingStatus::Pending,
            is_approved: false,
            is_rejected: false,
            is_paid: false,
            payment_token: None,
            payment_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Amount to collect: principal plus interest, floored to whole units
    pub fn gross_amount(&self) -> i64 {
        (self.amount * f64::from(100 + self.interest_rate) / 100.0).floor() as i64
    }

    /// A payment intent can be opened once, and only for an approved proposal
    pub fn is_payable(&self) -> bool {
        self.is_approved && self.payment_token.is_none()
    }

    /// Order id shown to the payment provider
    pub fn order_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.id)
    }

    /// Recover the lending id from a provider order id
    pub fn id_from_order_id(order_id: &str, prefix: &str) -> Option<Uuid> {
        order_id
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|id| Uuid::parse_str(id).ok())
    }
}

/// Lending joined with the borrower's username, for the admin listing
#[derive(Debug, Clone, PartialEq)]
pub struct LendingWithBorrower {
    pub lending: Lending,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Education, Gender, HomeOwnership, MaritalStatus};

    fn lending(amount: f64, interest_rate: i32) -> Lending {
        Lending::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            amount,
            interest_rate,
            12,
            BorrowerProfile {
                age: 28,
                gender: Gender::Male,
                income: 6_000_000.0,
                last_education: Education::Diploma,
                marital_status: MaritalStatus::Single,
                number_of_children: 0,
                home_ownership: HomeOwnership::Owning,
            },
            "kk.png".to_string(),
            "ktp.png".to_string(),
        )
    }

    #[test]
    fn test_new_is_pending() {
        let l = lending(1_000_000.0, 5);
        assert_eq!(l.status, LendingStatus::Pending);
        assert!(!l.is_approved && !l.is_rejected && !l.is_paid);
        assert!(!l.is_payable());
    }

    #[test]
    fn test_gross_amount_floors() {
        assert_eq!(lending(1_000_000.0, 5).gross_amount(), 1_050_000);
        assert_eq!(lending(333.0, 10).gross_amount(), 366);
    }

    #[test]
    fn test_payable_once() {
        let mut l = lending(500_000.0, 3);
        l.is_approved = true;
        assert!(l.is_payable());
        l.payment_token = Some("tok".to_string());
        assert!(!l.is_payable());
    }

    #[test]
    fn test_order_id_round_trip() {
        let l = lending(1.0, 0);
        let order_id = l.order_id("LENDHUB");
        assert_eq!(Lending::id_from_order_id(&order_id, "LENDHUB"), Some(l.id));
    }

    #[test]
    fn test_order_id_wrong_prefix() {
        let id = Uuid::new_v4();
        assert_eq!(Lending::id_from_order_id(&format!("OTHER-{id}"), "LENDHUB"), None);
        assert_eq!(Lending::id_from_order_id(&format!("LENDHUB{id}"), "LENDHUB"), None);
        assert_eq!(Lending::id_from_order_id("LENDHUB-42", "LENDHUB"), None);
    }
}
