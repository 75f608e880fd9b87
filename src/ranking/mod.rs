//! Candidate scoring and top-K ranking.
//!
//! Given validated recommend fields, an ordered candidate set and an external
//! scoring function, [`CandidateRanker`] produces a deterministic
//! descending-score ranking truncated to the requested K. Rankings exposed to
//! callers are wrapped in a [`RankedResult`] carrying a fresh correlation id.

pub mod error;
pub mod ranker;
pub mod types;


pub use error::RankingError;
pub use ranker::CandidateRanker;
pub use types::{RankedResult, Ranking};
