use thiserror::Error;

/// Ranking failures.
///
/// A scoring failure for any candidate fails the whole ranking; there is no
/// partial-result degrade. The gateway logs the full error server-side and
/// surfaces only a generic retry message to the caller.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("scoring failed for candidate '{candidate}': {reason}")]
    ScoringFailed { candidate: String, reason: String },
}
