//! Session assertion signing
//!
//! Access tokens are HS256 JWTs carrying `{uid, roles, iat, jti}`. They have no
//! `exp` claim: freshness is recomputed by the caller from `iat` and its own
//! validity window on every request.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    crypto, decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use lendhub_core::RoleSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ConfigError;
use crate::error::{AppError, AuthError};

/// Access token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub uid: Uuid,
    /// Roles granted at login
    pub roles: RoleSet,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token id, shared with the refresh session that minted it
    pub jti: String,
}

impl Claims {
    /// True while `iat + window` has not passed `now`
    #[must_use]
    pub fn is_fresh_at(&self, window_minutes: i64, now: DateTime<Utc>) -> bool {
        self.iat.saturating_add(window_minutes.saturating_mul(60)) >= now.timestamp()
    }

    #[must_use]
    pub fn is_fresh(&self, window_minutes: i64) -> bool {
        self.is_fresh_at(window_minutes, Utc::now())
    }
}

/// Token signer holding the server's symmetric key
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a signer from the configured secret
    ///
    /// # Errors
    /// Returns `ConfigError::MissingVar` when the secret is empty
    pub fn new(secret: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingVar("JWT_SECRET"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Sign a new access token issued now
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, uid: Uuid, jti: &str, roles: &RoleSet) -> Result<String, AppError> {
        self.issue_at(uid, jti, roles, Utc::now())
    }

    /// Sign an access token with an explicit issue time
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_at(
        &self,
        uid: Uuid,
        jti: &str,
        roles: &RoleSet,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            uid,
            roles: roles.clone(),
            iat: issued_at.timestamp(),
            jti: jti.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Check the signature and decode the claims. Freshness is not checked here.
    ///
    /// The MAC over `header.payload` is checked before either segment is parsed,
    /// so any change inside a three-segment token reads as tampering.
    ///
    /// # Errors
    /// `AuthError::InvalidSignature` when the token was tampered with,
    /// `AuthError::Malformed` for anything structurally wrong.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let Some((message, signature)) = token.rsplit_once('.') else {
            return Err(AuthError::Malformed);
        };
        if message.split('.').count() != 2 {
            return Err(AuthError::Malformed);
        }

        match crypto::verify(signature, message.as_bytes(), &self.decoding_key, Algorithm::HS256) {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::InvalidSignature),
            Err(_) => return Err(AuthError::Malformed),
        }

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::Malformed,
            })
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService").finish_non_exhaustive()
    }
}
