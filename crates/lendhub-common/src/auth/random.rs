//! Random identifiers for sessions

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Bytes of entropy in an access token id
const TOKEN_ID_BYTES: usize = 5;

/// Bytes of entropy in a refresh string
const REFRESH_STRING_BYTES: usize = 32;

fn random_url_safe(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Short id linking an access token to the refresh session that issued it
pub fn generate_token_id() -> String {
    random_url_safe(TOKEN_ID_BYTES)
}

/// Opaque, cookie-safe refresh string
pub fn generate_refresh_string() -> String {
    random_url_safe(REFRESH_STRING_BYTES)
}
