//! Payment gateway value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to open a hosted payment page for a lending disbursement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentRequest {
    pub order_id: String,
    pub gross_amount: i64,
    pub expiry_start: DateTime<Utc>,
    pub expiry_days: u32,
}

/// Hosted payment page returned by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub token: String,
    pub redirect_url: String,
}

/// Transaction status as reported by the gateway's status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatusReport {
    pub order_id: String,
    pub transaction_status: String,
    pub status_code: String,
    pub gross_amount: Option<String>,
    pub payment_type: Option<String>,
    pub fraud_status: Option<String>,
    pub transaction_time: Option<String>,
}

/// What a verified payment notification does to a lending record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Mark the lending paid and record the status
    Paid,
    /// Record the status only
    StatusOnly,
}

impl PaymentOutcome {
    /// `settlement` and `capture` count as paid unless fraud screening flagged
    /// the transaction. A missing or empty fraud status is not a flag.
    pub fn classify(transaction_status: &str, fraud_status: Option<&str>) -> Self {
        let settled = matches!(transaction_status, "settlement" | "capture");
        let flagged = matches!(fraud_status, Some("deny" | "challenge"));
        if settled && !flagged {
            Self::Paid
        } else {
            Self::StatusOnly
        }
    }
}
