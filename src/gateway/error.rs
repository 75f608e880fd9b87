use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::audit::AuditError;
use crate::auth::AuthError;
use crate::ranking::RankingError;
use crate::validation::ValidationError;

/// Gateway-level error: everything a handler can fail with, mapped onto an
/// HTTP status and a `{"message": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    Audit(#[from] AuditError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),

            ApiError::Auth(e) => match e {
                AuthError::MissingCredential
                | AuthError::Expired
                | AuthError::IncorrectPassword => (StatusCode::UNAUTHORIZED, e.to_string()),
                AuthError::BadSignature => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
                // Signing-key or hashing problems are ours, not the client's.
                AuthError::TokenCreation { .. } | AuthError::HashingFailed { .. } => {
                    error!(error = %e, "Credential handling failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Authentication is unavailable, please try again later".to_string(),
                    )
                }
            },

            // Full detail goes to the server log only; the caller sees a
            // generic retry message.
            ApiError::Ranking(e) => {
                error!(error = %e, "Ranking failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Recommendation scoring failed, please try again later".to_string(),
                )
            }

            ApiError::Audit(e) => {
                error!(error = %e, "Audit append failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Request could not be recorded, please try again later".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
