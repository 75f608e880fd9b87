//! Shared test app harness.
//!
//! Builds the full router over stub collaborators: a configurable stub
//! model, an in-memory audit sink, and a fixed clock so token expiry can be
//! exercised without sleeping.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cinerank::audit::MemoryAuditSink;
use cinerank::auth::{FixedClock, SessionSecrets, TokenAuthenticator, hash_password};
use cinerank::gateway::{HandlerState, create_router_with_state};
use cinerank::model::StubModel;

pub const TEST_PASSWORD: &str = "test-password";

/// Token lifetime used by the test authenticator, in hours.
pub const TEST_EXPIRATION_HOURS: i64 = 1;

pub struct TestApp {
    pub state: HandlerState<StubModel>,
    pub audit: MemoryAuditSink,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    pub fn new(model: StubModel) -> Self {
        let clock = Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        ));
        let secrets = Arc::new(SessionSecrets::from_parts(
            hash_password(TEST_PASSWORD).expect("hashing should succeed"),
            "test-secret-key",
        ));
        let authenticator = Arc::new(TokenAuthenticator::with_clock(
            &secrets,
            TEST_EXPIRATION_HOURS,
            clock.clone(),
        ));
        let audit = MemoryAuditSink::new();

        Self {
            state: HandlerState::new(secrets, authenticator, model, Arc::new(audit.clone())),
            audit,
            clock,
        }
    }

    /// The app with the original's dummy test model: a single movie "Test"
    /// scored with a constant.
    pub fn with_dummy_model() -> Self {
        Self::new(StubModel::constant(&["Test"], 0.0))
    }

    pub fn router(&self) -> Router {
        create_router_with_state(self.state.clone())
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = request.body(Body::empty()).unwrap();

        dispatch(self.router(), request).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: &Value,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = request.body(Body::from(body.to_string())).unwrap();

        dispatch(self.router(), request).await
    }

    /// POSTs without a JSON body (exercises the malformed-request path).
    pub async fn post_empty(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        dispatch(self.router(), request).await
    }

    /// Logs in with the test password and returns the issued token.
    pub async fn login(&self) -> String {
        let (status, body) = self
            .post_json(
                "/api/login",
                None,
                &serde_json::json!({"session_password": TEST_PASSWORD}),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "login should succeed: {:?}", body);
        body["access_token"].as_str().unwrap().to_string()
    }
}

async fn dispatch(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
