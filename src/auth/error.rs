use thiserror::Error;

/// Authentication failures.
///
/// The three token kinds are mutually exclusive and checked in order:
/// absence, then signature, then expiry. The gateway maps each variant to its
/// HTTP status (401 for missing/expired/incorrect password, 422 for a bad
/// signature).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No token was presented on a protected request.
    #[error("Missing Authorization Header")]
    MissingCredential,

    /// The token's signature does not validate against the signing key.
    #[error("Signature verification failed")]
    BadSignature,

    /// The token's expiry timestamp has passed.
    #[error("Token has expired")]
    Expired,

    /// Login attempt with a password that does not match the stored hash.
    #[error("Incorrect session password")]
    IncorrectPassword,

    /// Token encoding failed (signing-key problem, never client input).
    #[error("Token creation failed: {reason}")]
    TokenCreation { reason: String },

    /// Argon2 hashing failed at startup.
    #[error("Password hashing failed: {reason}")]
    HashingFailed { reason: String },
}
