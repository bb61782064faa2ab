//! Error types for domain discovery

use crate::ports::StoreError;

/// Errors raised inside the discovery pipeline
///
/// None of these reach callers of the public discovery or question
/// operations; each is mapped to a documented fallback.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum DiscoveryError {
    #[error("Classification failed: {0}")]
    ClassificationFailure(String),

    #[error("Recommendation '{name}' has relevance {score} outside (0, 1]")]
    RecommendationFailure { name: String, score: f64 },

    #[error("Domain activation failed: {0}")]
    ActivationFailure(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
