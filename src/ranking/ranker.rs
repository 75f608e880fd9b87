use std::cmp::Ordering;

use tracing::debug;

use crate::model::CandidateContext;
use crate::validation::RecommendParams;

use super::error::RankingError;
use super::types::Ranking;

/// Scores a candidate set against a request context and returns the top K.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateRanker;

impl CandidateRanker {
    pub fn new() -> Self {
        Self
    }

    /// Ranks `candidates` for the given request context.
    ///
    /// Builds one augmented context per candidate and calls `score_fn`
    /// exactly once each. Candidates are ordered by descending score; equal
    /// scores keep their original candidate order (stable sort), so the same
    /// inputs always yield the same ordering. The result is truncated to `k`
    /// after sorting: `k` larger than the candidate count returns everything,
    /// `k <= 0` returns an empty ranking, neither is an error.
    ///
    /// If `score_fn` fails for any candidate the whole ranking fails; no
    /// partially scored subset is returned.
    pub fn rank<F, E>(
        &self,
        params: &RecommendParams,
        candidates: &[String],
        mut score_fn: F,
        k: i64,
    ) -> Result<Ranking, RankingError>
    where
        F: FnMut(&CandidateContext<'_>) -> Result<f64, E>,
        E: std::fmt::Display,
    {
        debug!(
            num_candidates = candidates.len(),
            k, "Scoring candidate set"
        );

        let mut scored: Vec<(String, f64)> = Vec::with_capacity(candidates.len());
        for movie in candidates {
            let context = CandidateContext::new(params, movie);
            let score = score_fn(&context).map_err(|e| RankingError::ScoringFailed {
                candidate: movie.clone(),
                reason: e.to_string(),
            })?;
            scored.push((movie.clone(), score));
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let k = k.max(0) as usize;
        scored.truncate(k);

        let (candidates, scores) = scored.into_iter().unzip();
        Ok(Ranking { candidates, scores })
    }
}
