use std::path::PathBuf;
use thiserror::Error;

/// Prediction-model failures.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Model file could not be read.
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Model file is not valid JSON or has the wrong shape.
    #[error("failed to parse model file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Scoring a candidate context failed.
    #[error("prediction failed: {reason}")]
    Prediction { reason: String },
}
