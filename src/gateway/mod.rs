//! HTTP gateway layer (axum).
//!
//! Thin mapping from routes to the core components; every route runs
//! validation first, then (for protected operations) token verification,
//! then the ranking/audit work.

pub mod error;
pub mod handler;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorResponse};
pub use handler::{
    index_handler, login_handler, protected_handler, recommend_handler, score_handler,
};
pub use state::HandlerState;

use crate::model::RecommendationModel;

pub fn create_router_with_state<M>(state: HandlerState<M>) -> Router
where
    M: RecommendationModel + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .route("/api/login", post(login_handler))
        .route("/api/protected", get(protected_handler))
        .route("/api/recommend", post(recommend_handler))
        .route("/api/score", post(score_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
