//! Configurable test model.

use super::error::ModelError;
use super::{CandidateContext, RecommendationModel};

/// A model with fixed per-movie scores, for tests.
///
/// Candidates keep their construction order, which makes tie-break and
/// ordering assertions deterministic. A failing stub exercises the
/// whole-ranking-fails path.
#[derive(Debug, Clone, Default)]
pub struct StubModel {
    movies: Vec<(String, f64)>,
    failing: bool,
}

impl StubModel {
    /// A model scoring every listed movie with the same constant.
    pub fn constant(movies: &[&str], score: f64) -> Self {
        Self {
            movies: movies.iter().map(|m| (m.to_string(), score)).collect(),
            failing: false,
        }
    }

    /// A model with an explicit score per movie.
    pub fn with_scores(movies: &[(&str, f64)]) -> Self {
        Self {
            movies: movies.iter().map(|(m, s)| (m.to_string(), *s)).collect(),
            failing: false,
        }
    }

    /// A model whose scoring function always fails.
    pub fn failing(movies: &[&str]) -> Self {
        Self {
            movies: movies.iter().map(|m| (m.to_string(), 0.0)).collect(),
            failing: true,
        }
    }
}

impl RecommendationModel for StubModel {
    fn candidates(&self) -> Vec<String> {
        self.movies.iter().map(|(m, _)| m.clone()).collect()
    }

    fn score(&self, context: &CandidateContext<'_>) -> Result<f64, ModelError> {
        if self.failing {
            return Err(ModelError::Prediction {
                reason: "stub model configured to fail".to_string(),
            });
        }

        Ok(self
            .movies
            .iter()
            .find(|(m, _)| m == context.movie)
            .map(|(_, s)| *s)
            .unwrap_or(0.0))
    }
}
