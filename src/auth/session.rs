//! Process-wide session secrets.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::config::Config;

use super::error::AuthError;

/// The immutable secrets the whole service authenticates with.
///
/// Built once at startup from [`Config`]: the plaintext `SESSION_PASSWORD` is
/// hashed with Argon2 and dropped; only the hash and the token signing key
/// live for the process lifetime. There is exactly one session identity, not
/// per-user accounts.
#[derive(Clone)]
pub struct SessionSecrets {
    password_hash: String,
    signing_key: String,
}

impl std::fmt::Debug for SessionSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSecrets")
            .field("password_hash", &"<redacted>")
            .field("signing_key", &"<redacted>")
            .finish()
    }
}

impl SessionSecrets {
    /// Derives the secrets from the resolved configuration.
    pub fn derive(config: &Config) -> Result<Self, AuthError> {
        let password_hash = hash_password(&config.session_password)?;

        Ok(Self {
            password_hash,
            signing_key: config.secret_key.clone(),
        })
    }

    /// Builds secrets from an already-computed hash.
    pub fn from_parts(password_hash: impl Into<String>, signing_key: impl Into<String>) -> Self {
        Self {
            password_hash: password_hash.into(),
            signing_key: signing_key.into(),
        }
    }

    /// Checks a login candidate against the stored hash.
    ///
    /// A mismatch is [`AuthError::IncorrectPassword`], distinct from
    /// validation errors. The comparison goes through Argon2 verification,
    /// never a direct string compare.
    pub fn verify_password(&self, candidate: &str) -> Result<(), AuthError> {
        let parsed = PasswordHash::new(&self.password_hash).map_err(|e| {
            AuthError::HashingFailed {
                reason: e.to_string(),
            }
        })?;

        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|_| AuthError::IncorrectPassword)
    }

    pub fn signing_key(&self) -> &str {
        &self.signing_key
    }
}

/// Hashes a plaintext password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashingFailed {
            reason: e.to_string(),
        })
}
