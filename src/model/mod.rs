//! The prediction-model collaborator.
//!
//! The core treats the model as a black box: an ordered candidate catalog
//! plus a scoring function over an augmented request context. [`LinearModel`]
//! is the production implementation (a JSON weights file); the service falls
//! back to [`LinearModel::stub`] when no model path is configured.

pub mod error;
pub mod linear;

#[cfg(any(test, feature = "mock"))]
pub mod stub;


pub use error::ModelError;
pub use linear::LinearModel;
#[cfg(any(test, feature = "mock"))]
pub use stub::StubModel;

use serde::Serialize;

use crate::validation::{Gender, Occupation, RecommendParams};

/// The request context augmented with one candidate, as handed to the
/// scoring function. One of these is built per candidate per ranking.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateContext<'a> {
    pub age: u64,
    pub gender: Gender,
    pub occupation: Occupation,
    pub movie: &'a str,
}

impl<'a> CandidateContext<'a> {
    pub fn new(params: &RecommendParams, movie: &'a str) -> Self {
        Self {
            age: params.age,
            gender: params.gender,
            occupation: params.occupation,
            movie,
        }
    }
}

/// The two operations the core needs from a model.
pub trait RecommendationModel: Send + Sync {
    /// The ordered candidate catalog. Immutable per request.
    fn candidates(&self) -> Vec<String>;

    /// Scores one augmented context.
    fn score(&self, context: &CandidateContext<'_>) -> Result<f64, ModelError>;
}
