use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{HeaderMap, header},
};
use serde_json::{Value, json};
use tracing::{info, instrument};

use crate::audit::{AuditRecord, FeedbackRecord};
use crate::model::RecommendationModel;
use crate::ranking::RankedResult;
use crate::validation::{validate_login, validate_recommend, validate_score};

use super::error::ApiError;
use super::state::HandlerState;

/// Extracts the bearer token from the Authorization header, if any.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Flattens an extractor result: any body rejection (absent, unparseable,
/// wrong content type) becomes `None` and fails validation as a malformed
/// request before any field-level check.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Option<Value> {
    body.ok().map(|Json(value)| value)
}

pub async fn index_handler() -> Json<Value> {
    Json(json!({"message": "Hello, World!"}))
}

/// POST /api/login: password check, token issue.
#[instrument(skip_all)]
pub async fn login_handler<M>(
    State(state): State<HandlerState<M>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
    M: RecommendationModel + Clone + Send + Sync + 'static,
{
    let payload = json_body(body);
    let params = validate_login(payload.as_ref())?;

    state.secrets.verify_password(&params.session_password)?;
    let access_token = state.authenticator.issue()?;

    info!("Session authenticated, token issued");
    Ok(Json(json!({"access_token": access_token})))
}

/// GET /api/protected: session-authentication probe.
#[instrument(skip_all)]
pub async fn protected_handler<M>(
    State(state): State<HandlerState<M>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError>
where
    M: RecommendationModel + Clone + Send + Sync + 'static,
{
    state.authenticator.verify(bearer_token(&headers))?;
    Ok(Json(json!({"message": "Protected"})))
}

/// POST /api/recommend: validate, authenticate, rank, audit.
///
/// Validation runs before the token check, so a malformed payload fails 400
/// regardless of auth state.
#[instrument(skip_all, fields(correlation_id = tracing::field::Empty))]
pub async fn recommend_handler<M>(
    State(state): State<HandlerState<M>>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
    M: RecommendationModel + Clone + Send + Sync + 'static,
{
    let payload = json_body(body);
    let params = validate_recommend(payload.as_ref())?;

    state.authenticator.verify(bearer_token(&headers))?;

    let candidates = state.model.candidates();
    let ranking = state.ranker.rank(
        &params,
        &candidates,
        |context| state.model.score(context),
        params.max_recs_or_default(),
    )?;

    let result = RankedResult::new(ranking);
    tracing::Span::current().record(
        "correlation_id",
        tracing::field::display(&result.correlation_id),
    );

    state
        .audit
        .record_ranking(&AuditRecord::from_result(&params, &result))?;

    info!(
        recommendations = result.recommendations.len(),
        "Recommendations served"
    );

    Ok(Json(json!({
        "recommendations": result.recommendations,
        "correlation_id": result.correlation_id,
    })))
}

/// POST /api/score: validate, authenticate, append feedback.
///
/// The submitted id is shape-checked only; it is not matched against
/// previously issued correlation ids.
#[instrument(skip_all)]
pub async fn score_handler<M>(
    State(state): State<HandlerState<M>>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
    M: RecommendationModel + Clone + Send + Sync + 'static,
{
    let payload = json_body(body);
    let params = validate_score(payload.as_ref())?;

    state.authenticator.verify(bearer_token(&headers))?;

    state.audit.record_feedback(&FeedbackRecord {
        correlation_id: params.id.clone(),
        movie: params.movie.clone(),
        score: params.score,
    })?;

    Ok(Json(json!({"message": "Score recorded"})))
}
