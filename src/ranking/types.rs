use uuid::Uuid;

/// An ordered top-K ranking: candidate ids aligned with their scores.
///
/// Scores are carried for audit logging; the response body only exposes the
/// candidate ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub candidates: Vec<String>,
    pub scores: Vec<f64>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// A ranking as exposed to an external caller, carrying a freshly minted
/// correlation id.
///
/// The id is a 128-bit random UUID in hyphenated (36-character) form. It
/// exists so a later feedback submission can reference this specific ranking
/// call; nothing here persists the mapping.
#[derive(Debug, Clone)]
pub struct RankedResult {
    pub recommendations: Vec<String>,
    pub scores: Vec<f64>,
    pub correlation_id: String,
}

impl RankedResult {
    /// Wraps a ranking with a fresh correlation id.
    pub fn new(ranking: Ranking) -> Self {
        Self {
            recommendations: ranking.candidates,
            scores: ranking.scores,
            correlation_id: Uuid::new_v4().to_string(),
        }
    }
}
