//! Strict request-payload validation.
//!
//! Each endpoint has a fixed schema validated in a fixed field order with
//! short-circuit on the first violation. The validators are pure functions
//! over the parsed JSON body; they produce typed parameter records so
//! nothing past this boundary reads untyped maps.

pub mod error;
pub mod types;


pub use error::ValidationError;
pub use types::{
    DEFAULT_MAX_RECS, Gender, LoginParams, Occupation, RecommendParams, ScoreParams,
};

use serde_json::{Map, Value};

/// Keys the recommend schema permits; anything else is rejected.
const RECOMMEND_KEYS: [&str; 4] = ["age", "gender", "occupation", "max_recs"];

fn as_object(payload: Option<&Value>) -> Result<&Map<String, Value>, ValidationError> {
    payload
        .and_then(Value::as_object)
        .ok_or(ValidationError::MalformedRequest)
}

/// Validates a login payload.
///
/// Requires a `session_password` key; its value may be any JSON type (the
/// password check simply won't match a non-string).
pub fn validate_login(payload: Option<&Value>) -> Result<LoginParams, ValidationError> {
    let data = as_object(payload)?;

    let value = data
        .get("session_password")
        .ok_or(ValidationError::MissingParameter {
            name: "session_password",
        })?;

    let session_password = match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    };

    Ok(LoginParams { session_password })
}

/// Validates a recommend payload.
///
/// Check order: age-presence, age-type, gender-presence, gender-value,
/// occupation-presence, occupation-value, max_recs-type, unexpected-keys.
pub fn validate_recommend(payload: Option<&Value>) -> Result<RecommendParams, ValidationError> {
    let data = as_object(payload)?;

    let age_value = data
        .get("age")
        .ok_or(ValidationError::MissingParameter { name: "age" })?;
    // as_u64 is None for floats, strings and negatives alike.
    let age = age_value.as_u64().ok_or(ValidationError::AgeNotInteger)?;

    let gender_value = data
        .get("gender")
        .ok_or(ValidationError::MissingParameter { name: "gender" })?;
    let gender = gender_value
        .as_str()
        .and_then(Gender::from_name)
        .ok_or(ValidationError::InvalidGender)?;

    let occupation_value = data
        .get("occupation")
        .ok_or(ValidationError::MissingParameter { name: "occupation" })?;
    let occupation = occupation_value
        .as_str()
        .and_then(Occupation::from_name)
        .ok_or_else(ValidationError::invalid_occupation)?;

    let max_recs = match data.get("max_recs") {
        Some(value) => Some(value.as_i64().ok_or(ValidationError::MaxRecsNotInteger)?),
        None => None,
    };

    if data.keys().any(|k| !RECOMMEND_KEYS.contains(&k.as_str())) {
        return Err(ValidationError::unexpected_recommend_parameters());
    }

    Ok(RecommendParams {
        age,
        gender,
        occupation,
        max_recs,
    })
}

/// Validates a score-submission payload.
///
/// Check order: id-presence, id-shape, movie-presence, score-presence,
/// score-type, score-range.
pub fn validate_score(payload: Option<&Value>) -> Result<ScoreParams, ValidationError> {
    let data = as_object(payload)?;

    let id_value = data
        .get("id")
        .ok_or(ValidationError::MissingParameter { name: "id" })?;
    let id = id_value
        .as_str()
        .filter(|s| is_correlation_id_shaped(s))
        .ok_or(ValidationError::InvalidScoreId)?
        .to_string();

    let movie_value = data
        .get("movie")
        .ok_or(ValidationError::MissingParameter { name: "movie" })?;
    let movie = match movie_value {
        Value::String(s) if s.is_empty() => return Err(ValidationError::EmptyMovie),
        Value::Null => return Err(ValidationError::EmptyMovie),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let score_value = data
        .get("score")
        .ok_or(ValidationError::MissingParameter { name: "score" })?;
    let score = score_value
        .as_f64()
        .ok_or(ValidationError::ScoreNotNumeric)?;
    if !(1.0..=5.0).contains(&score) {
        return Err(ValidationError::ScoreOutOfRange);
    }

    Ok(ScoreParams { id, movie, score })
}

/// 36 characters forming 5 hyphen-separated groups (UUID shape, not
/// cryptographically validated).
fn is_correlation_id_shaped(s: &str) -> bool {
    s.chars().count() == 36 && s.split('-').count() == 5
}
