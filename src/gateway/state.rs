use std::sync::Arc;

use crate::audit::AuditSink;
use crate::auth::{SessionSecrets, TokenAuthenticator};
use crate::model::RecommendationModel;
use crate::ranking::CandidateRanker;

/// Shared handler state.
///
/// Everything here is immutable after startup; requests only read through the
/// `Arc`s, so the handlers run concurrently without locking.
#[derive(Clone)]
pub struct HandlerState<M: RecommendationModel + Clone + Send + Sync + 'static> {
    pub secrets: Arc<SessionSecrets>,

    pub authenticator: Arc<TokenAuthenticator>,

    pub model: M,

    pub ranker: CandidateRanker,

    pub audit: Arc<dyn AuditSink>,
}

impl<M> HandlerState<M>
where
    M: RecommendationModel + Clone + Send + Sync + 'static,
{
    pub fn new(
        secrets: Arc<SessionSecrets>,
        authenticator: Arc<TokenAuthenticator>,
        model: M,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            secrets,
            authenticator,
            model,
            ranker: CandidateRanker::new(),
            audit,
        }
    }
}
