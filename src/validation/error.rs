use thiserror::Error;

use super::types::Occupation;

/// Client-input validation failures.
///
/// Every variant carries the exact message surfaced to the caller; the
/// gateway maps all of them to HTTP 400. Each schema checks its fields in a
/// fixed order and short-circuits on the first failure, so a payload with
/// several problems always reports the earliest one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body was absent or not a JSON object. Reported before any
    /// field-level check runs.
    #[error("Missing JSON request")]
    MalformedRequest,

    /// A required key is absent from the payload.
    #[error("Missing parameter: '{name}'")]
    MissingParameter { name: &'static str },

    #[error("The parameter 'age' must be a non-negative integer")]
    AgeNotInteger,

    #[error("The parameter 'gender' must be one of the following: 'F', 'M', 'O'")]
    InvalidGender,

    #[error("The parameter 'occupation' must be one of the following: {valid}")]
    InvalidOccupation { valid: String },

    #[error("The parameter 'max_recs' must be an integer")]
    MaxRecsNotInteger,

    #[error("The only valid parameters are: {valid}")]
    UnexpectedParameters { valid: String },

    #[error("The parameter 'id' must be a 36 character string with 5 groups separated by '-'")]
    InvalidScoreId,

    #[error("The parameter 'movie' must not be empty")]
    EmptyMovie,

    #[error("The parameter 'score' must be a number")]
    ScoreNotNumeric,

    #[error("The parameter 'score' must be in the interval [1, 5]")]
    ScoreOutOfRange,
}

impl ValidationError {
    /// Occupation failure enumerating the full sorted valid set.
    pub fn invalid_occupation() -> Self {
        let valid = Occupation::ALL
            .iter()
            .map(|o| format!("'{}'", o))
            .collect::<Vec<_>>()
            .join(", ");

        Self::InvalidOccupation { valid }
    }

    /// Extra-key failure for the recommend schema.
    pub fn unexpected_recommend_parameters() -> Self {
        Self::UnexpectedParameters {
            valid: "'age', 'gender', 'occupation', and 'max_recs'".to_string(),
        }
    }
}
