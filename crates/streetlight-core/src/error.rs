//! Error types shared across the streetlight crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreetlightError {
    // Caller input errors
    #[error("Invalid bounding box: {reason}")]
    InvalidBounds { reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    MissingCredential { key: String },

    // Upstream chat provider errors, surfaced verbatim and never retried
    #[error("Chat provider error: {0}")]
    Provider(String),

    // Dataset errors are absorbed inside FeatureStore and never reach callers
    #[error("Dataset load failed: {0}")]
    DatasetLoad(String),
}

pub type Result<T> = std::result::Result<T, StreetlightError>;
