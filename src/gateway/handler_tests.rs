//! Handler-level tests: error mapping, auth ordering, audit wiring.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::audit::MemoryAuditSink;
use crate::auth::{FixedClock, SessionSecrets, TokenAuthenticator, hash_password};
use crate::model::StubModel;

use super::state::HandlerState;
use super::create_router_with_state;

const TEST_PASSWORD: &str = "test-password";

struct TestContext {
    state: HandlerState<StubModel>,
    audit: MemoryAuditSink,
    clock: Arc<FixedClock>,
}

fn test_context(model: StubModel) -> TestContext {
    let clock = Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ));
    let secrets = Arc::new(SessionSecrets::from_parts(
        hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        "test-secret-key",
    ));
    let authenticator = Arc::new(TokenAuthenticator::with_clock(&secrets, 1, clock.clone()));
    let audit = MemoryAuditSink::new();

    TestContext {
        state: HandlerState::new(secrets, authenticator, model, Arc::new(audit.clone())),
        audit,
        clock,
    }
}

async fn post_json(
    ctx: &TestContext,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = request.body(Body::from(body.to_string())).unwrap();

    let response = create_router_with_state(ctx.state.clone())
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get(ctx: &TestContext, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = request.body(Body::empty()).unwrap();

    let response = create_router_with_state(ctx.state.clone())
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn login(ctx: &TestContext) -> String {
    let (status, body) = post_json(
        ctx,
        "/api/login",
        None,
        json!({"session_password": TEST_PASSWORD}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_index_and_health() {
    let ctx = test_context(StubModel::default());

    let (status, body) = get(&ctx, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, World!");

    let (status, body) = get(&ctx, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_issues_token() {
    let ctx = test_context(StubModel::default());
    let token = login(&ctx).await;
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    let ctx = test_context(StubModel::default());
    let (status, body) =
        post_json(&ctx, "/api/login", None, json!({"session_password": "nope"})).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Incorrect session password");
}

#[tokio::test]
async fn test_login_missing_body_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/login")
        .body(Body::empty())
        .unwrap();
    let ctx = test_context(StubModel::default());

    let response = create_router_with_state(ctx.state.clone())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Missing JSON request");
}

#[tokio::test]
async fn test_protected_requires_token() {
    let ctx = test_context(StubModel::default());

    let (status, body) = get(&ctx, "/api/protected", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let message = body["message"].as_str().unwrap().to_lowercase();
    assert!(message.contains("missing"));
    assert!(message.contains("authorization"));
    assert!(message.contains("header"));
}

#[tokio::test]
async fn test_protected_with_token() {
    let ctx = test_context(StubModel::default());
    let token = login(&ctx).await;

    let (status, body) = get(&ctx, "/api/protected", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Protected");
}

#[tokio::test]
async fn test_tampered_token_is_422() {
    let ctx = test_context(StubModel::default());
    let mut token = login(&ctx).await;
    let replacement = if token.ends_with('A') { 'B' } else { 'A' };
    token.pop();
    token.push(replacement);

    let (status, body) = get(&ctx, "/api/protected", Some(&token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["message"].as_str().unwrap().to_lowercase();
    assert!(message.contains("signature"));
    assert!(message.contains("verification"));
    assert!(message.contains("failed"));
}

#[tokio::test]
async fn test_expired_token_is_401() {
    let ctx = test_context(StubModel::default());
    let token = login(&ctx).await;

    ctx.clock.advance(chrono::Duration::hours(2));

    let (status, body) = get(&ctx, "/api/protected", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let message = body["message"].as_str().unwrap().to_lowercase();
    assert!(message.contains("token"));
    assert!(message.contains("expired"));
}

#[tokio::test]
async fn test_recommend_validates_before_auth() {
    // A malformed payload fails 400 even without a token.
    let ctx = test_context(StubModel::default());
    let (status, body) = post_json(
        &ctx,
        "/api/recommend",
        None,
        json!({"age": "a", "gender": "O", "occupation": "none"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap().to_lowercase();
    assert!(message.contains("age"));
    assert!(message.contains("integer"));
}

#[tokio::test]
async fn test_recommend_audits_the_ranking() {
    let ctx = test_context(StubModel::with_scores(&[("A", 0.2), ("B", 0.9)]));
    let token = login(&ctx).await;

    let (status, body) = post_json(
        &ctx,
        "/api/recommend",
        Some(&token),
        json!({"age": 1, "gender": "O", "occupation": "none"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let correlation_id = body["correlation_id"].as_str().unwrap();

    let rankings = ctx.audit.rankings();
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].correlation_id, correlation_id);
    assert_eq!(rankings[0].recommendations, vec!["B", "A"]);
    assert_eq!(rankings[0].scores, vec![0.9, 0.2]);
}

#[tokio::test]
async fn test_ranking_failure_is_generic_500() {
    let ctx = test_context(StubModel::failing(&["A", "B"]));
    let token = login(&ctx).await;

    let (status, body) = post_json(
        &ctx,
        "/api/recommend",
        Some(&token),
        json!({"age": 1, "gender": "O", "occupation": "none"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().unwrap();
    // No internal detail leaks; the caller only sees a retry message.
    assert!(message.contains("try again later"));
    assert!(!message.contains("stub"));
    assert!(!message.contains("candidate"));
}

#[tokio::test]
async fn test_score_appends_feedback() {
    let ctx = test_context(StubModel::default());
    let token = login(&ctx).await;

    let (status, body) = post_json(
        &ctx,
        "/api/score",
        Some(&token),
        json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "movie": "Alien",
            "score": 4
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Score recorded");

    let feedback = ctx.audit.feedback();
    assert_eq!(feedback.len(), 1);
    assert_eq!(
        feedback[0].correlation_id,
        "123e4567-e89b-12d3-a456-426614174000"
    );
    assert_eq!(feedback[0].movie, "Alien");
    assert_eq!(feedback[0].score, 4.0);
}
