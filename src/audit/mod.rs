//! Append-only audit trail.
//!
//! Every externally exposed ranking and every accepted feedback submission is
//! appended through [`AuditSink`]. The default sink writes structured
//! `tracing` events on the `audit` target; the sink behind the handler state
//! is the only place recommendations outlive a request. Appends are direct
//! passthroughs: no retries, no dedup (a repeated append duplicates the
//! record), and feedback ids are not matched against issued correlation ids.


use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::ranking::RankedResult;
use crate::validation::RecommendParams;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit append failed: {reason}")]
    AppendFailed { reason: String },
}

/// One ranking exposure: the request inputs, the chosen candidates and their
/// scores, keyed by the minted correlation id.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub correlation_id: String,
    pub context: RecommendParams,
    pub recommendations: Vec<String>,
    pub scores: Vec<f64>,
}

impl AuditRecord {
    pub fn from_result(context: &RecommendParams, result: &RankedResult) -> Self {
        Self {
            correlation_id: result.correlation_id.clone(),
            context: context.clone(),
            recommendations: result.recommendations.clone(),
            scores: result.scores.clone(),
        }
    }
}

/// One feedback submission referencing an earlier ranking by correlation id.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRecord {
    pub correlation_id: String,
    pub movie: String,
    pub score: f64,
}

/// Append-only sink for audit records.
pub trait AuditSink: Send + Sync {
    fn record_ranking(&self, record: &AuditRecord) -> Result<(), AuditError>;

    fn record_feedback(&self, record: &FeedbackRecord) -> Result<(), AuditError>;
}

/// Default sink: structured events on the `audit` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record_ranking(&self, record: &AuditRecord) -> Result<(), AuditError> {
        info!(
            target: "audit",
            correlation_id = %record.correlation_id,
            context = ?record.context,
            recommendations = ?record.recommendations,
            scores = ?record.scores,
            "ranking"
        );
        Ok(())
    }

    fn record_feedback(&self, record: &FeedbackRecord) -> Result<(), AuditError> {
        info!(
            target: "audit",
            correlation_id = %record.correlation_id,
            movie = %record.movie,
            score = record.score,
            "feedback"
        );
        Ok(())
    }
}

/// In-memory sink for test assertions.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Default)]
pub struct MemoryAuditSink {
    rankings: std::sync::Arc<parking_lot::Mutex<Vec<AuditRecord>>>,
    feedback: std::sync::Arc<parking_lot::Mutex<Vec<FeedbackRecord>>>,
}

#[cfg(any(test, feature = "mock"))]
impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rankings(&self) -> Vec<AuditRecord> {
        self.rankings.lock().clone()
    }

    pub fn feedback(&self) -> Vec<FeedbackRecord> {
        self.feedback.lock().clone()
    }
}

#[cfg(any(test, feature = "mock"))]
impl AuditSink for MemoryAuditSink {
    fn record_ranking(&self, record: &AuditRecord) -> Result<(), AuditError> {
        self.rankings.lock().push(record.clone());
        Ok(())
    }

    fn record_feedback(&self, record: &FeedbackRecord) -> Result<(), AuditError> {
        self.feedback.lock().push(record.clone());
        Ok(())
    }
}
