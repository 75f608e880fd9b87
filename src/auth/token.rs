//! Signed, expiring, stateless bearer tokens.

use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use super::error::AuthError;
use super::session::SessionSecrets;

/// The single principal every token is issued for.
pub const SESSION_IDENTITY: &str = "session_password";

/// JWT claims: subject, issued-at, expires-at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies the service's bearer tokens.
///
/// Tokens are self-contained HS256 JWTs; verification needs only the signing
/// key and a clock, no server-side session table. Every protected request
/// re-verifies its token independently.
pub struct TokenAuthenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("expiration_hours", &self.expiration_hours)
            .field("clock", &self.clock)
            .finish()
    }
}

impl TokenAuthenticator {
    /// Builds an authenticator over the wall clock.
    pub fn new(secrets: &SessionSecrets, expiration_hours: i64) -> Self {
        Self::with_clock(secrets, expiration_hours, Arc::new(SystemClock))
    }

    /// Builds an authenticator with an explicit time source.
    pub fn with_clock(
        secrets: &SessionSecrets,
        expiration_hours: i64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let key_bytes = secrets.signing_key().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(key_bytes),
            decoding_key: DecodingKey::from_secret(key_bytes),
            expiration_hours,
            clock,
        }
    }

    /// Issues a token for the session identity, valid for the configured
    /// expiration window starting now.
    pub fn issue(&self) -> Result<String, AuthError> {
        let now = self.clock.now();
        let claims = Claims {
            sub: SESSION_IDENTITY.to_string(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(self.expiration_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenCreation {
                reason: e.to_string(),
            }
        })
    }

    /// Verifies a presented token and returns its subject.
    ///
    /// Checks are strictly ordered: absence, then signature, then expiry.
    /// Expiry is compared against the injected clock (not the JWT library's
    /// wall clock) so the token is valid for all t in [iat, exp) and invalid
    /// exactly at exp.
    pub fn verify(&self, token: Option<&str>) -> Result<String, AuthError> {
        let token = token.ok_or(AuthError::MissingCredential)?;

        let mut validation = Validation::default();
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::BadSignature)?;

        if self.clock.now().timestamp() >= data.claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(data.claims.sub)
    }
}
