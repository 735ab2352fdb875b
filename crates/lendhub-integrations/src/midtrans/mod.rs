//! Midtrans payment gateway
//!
//! Snap opens hosted payment pages, the core API answers status lookups, and
//! notifications are authenticated with a SHA-512 signature over the server key.

mod client;
mod signature;

pub use client::MidtransGateway;
pub use signature::SignatureVerifier;
