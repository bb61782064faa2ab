//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("Recent history window must be at least 1")]
    InvalidHistoryWindow,

    #[error("Knowledge TTL must be between 1 and 8760 hours")]
    InvalidKnowledgeTtl,

    #[error("Persistence confidence threshold must be within [0, 1], got {0}")]
    InvalidConfidenceThreshold(f64),

    #[error("Max recommendations must be at least 1")]
    InvalidMaxRecommendations,

    #[error("Max input length must be at least 1")]
    InvalidMaxInputLength,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
