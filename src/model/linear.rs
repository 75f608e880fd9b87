//! Linear prediction model over one-hot request features.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::{CandidateContext, RecommendationModel};

/// Weight-name prefix identifying the candidate one-hots.
const MOVIE_FEATURE_PREFIX: &str = "movie=";

/// A linear regression over vectorized request features.
///
/// The model file is plain JSON: an intercept plus a weight per feature name.
/// Numeric features (`age`) contribute `weight * value`; one-hot features
/// (`gender=F`, `occupation=engineer`, `movie=Toy Story`) contribute their
/// weight when the context matches. Unknown features contribute nothing.
///
/// The candidate catalog is implicit in the weights: every `movie=`-prefixed
/// feature names one candidate. `BTreeMap` keeps the feature names sorted, so
/// candidate order is deterministic across loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    weights: BTreeMap<String, f64>,
}

impl LinearModel {
    /// Loads a model from a JSON weights file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&raw).map_err(|e| ModelError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Builds a model directly from weights.
    pub fn from_weights(intercept: f64, weights: BTreeMap<String, f64>) -> Self {
        Self { intercept, weights }
    }

    /// A small built-in model used when no model file is configured.
    pub fn stub() -> Self {
        let weights = BTreeMap::from([
            ("age".to_string(), 0.01),
            ("gender=F".to_string(), 0.1),
            ("gender=M".to_string(), 0.05),
            ("movie=Casablanca".to_string(), 0.9),
            ("movie=Metropolis".to_string(), 0.4),
            ("movie=Seven Samurai".to_string(), 0.7),
            ("movie=The General".to_string(), 0.2),
        ]);

        Self {
            intercept: 3.0,
            weights,
        }
    }

    fn weight(&self, feature: &str) -> f64 {
        self.weights.get(feature).copied().unwrap_or(0.0)
    }
}

impl RecommendationModel for LinearModel {
    fn candidates(&self) -> Vec<String> {
        self.weights
            .keys()
            .filter_map(|name| name.strip_prefix(MOVIE_FEATURE_PREFIX))
            .map(ToOwned::to_owned)
            .collect()
    }

    fn score(&self, context: &CandidateContext<'_>) -> Result<f64, ModelError> {
        let mut score = self.intercept;

        score += self.weight("age") * context.age as f64;
        score += self.weight(&format!("gender={}", context.gender.as_str()));
        score += self.weight(&format!("occupation={}", context.occupation.as_str()));
        score += self.weight(&format!("{}{}", MOVIE_FEATURE_PREFIX, context.movie));

        Ok(score)
    }
}
