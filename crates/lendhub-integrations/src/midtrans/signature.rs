//! Payment notification signature verification

use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

/// Verifies `signature_key` on gateway notifications
///
/// The expected value is the lowercase hex SHA-512 of
/// `order_id + status_code + gross_amount + server_key`.
#[derive(Clone)]
pub struct SignatureVerifier {
    server_key: String,
}

impl SignatureVerifier {
    pub fn new(server_key: impl Into<String>) -> Self {
        Self {
            server_key: server_key.into(),
        }
    }

    /// Compute the signature the gateway would send for these fields
    pub fn sign(&self, order_id: &str, status_code: &str, gross_amount: &str) -> String {
        let mut hasher = Sha512::new();
        hasher.update(order_id.as_bytes());
        hasher.update(status_code.as_bytes());
        hasher.update(gross_amount.as_bytes());
        hasher.update(self.server_key.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Constant-time comparison of the provided signature against the expected one
    pub fn verify(
        &self,
        order_id: &str,
        status_code: &str,
        gross_amount: &str,
        signature_key: &str,
    ) -> bool {
        let expected = self.sign(order_id, status_code, gross_amount);
        expected.as_bytes().ct_eq(signature_key.as_bytes()).into()
    }
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier").finish_non_exhaustive()
    }
}
