//! Cinerank library crate (used by the server binary and integration tests).
//!
//! A session-authenticated movie recommendation service: one shared password
//! buys a time-bounded bearer token; protected endpoints validate strict
//! payload schemas, score a finite candidate catalog with a pluggable linear
//! model and return deterministic top-K recommendations, each tagged with a
//! correlation id that later feedback submissions reference.
//!
//! Module map:
//! - [`config`] - environment-backed startup configuration
//! - [`auth`] - password check and stateless signed tokens
//! - [`validation`] - per-endpoint payload schemas and error taxonomy
//! - [`model`] - the prediction-model collaborator (catalog + scoring)
//! - [`ranking`] - candidate scoring and deterministic top-K ranking
//! - [`audit`] - the append-only audit trail
//! - [`gateway`] - the axum HTTP layer
//!
//! Test/mock collaborators ([`model::StubModel`], [`auth::FixedClock`],
//! [`audit::MemoryAuditSink`]) are available behind the `mock` feature.

pub mod audit;
pub mod auth;
pub mod config;
pub mod gateway;
pub mod model;
pub mod ranking;
pub mod validation;

pub use audit::{AuditError, AuditRecord, AuditSink, FeedbackRecord, TracingAuditSink};
#[cfg(any(test, feature = "mock"))]
pub use audit::MemoryAuditSink;

#[cfg(any(test, feature = "mock"))]
pub use auth::FixedClock;
pub use auth::{
    AuthError, Clock, SESSION_IDENTITY, SessionSecrets, SystemClock, TokenAuthenticator,
};

pub use config::{Config, ConfigError};

pub use gateway::{ApiError, ErrorResponse, HandlerState, create_router_with_state};

#[cfg(any(test, feature = "mock"))]
pub use model::StubModel;
pub use model::{CandidateContext, LinearModel, ModelError, RecommendationModel};

pub use ranking::{CandidateRanker, RankedResult, Ranking, RankingError};

pub use validation::{
    DEFAULT_MAX_RECS, Gender, LoginParams, Occupation, RecommendParams, ScoreParams,
    ValidationError, validate_login, validate_recommend, validate_score,
};
