//! Domain discovery configuration

use chrono::Duration;
use serde::Deserialize;

use crate::domain::discovery::DiscoverySettings;

use super::error::ConfigValidationError;
use super::features::FeatureFlags;

const MAX_KNOWLEDGE_TTL_HOURS: u32 = 24 * 365;

/// Domain discovery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Hours before cached domain knowledge is rebuilt
    #[serde(default = "default_knowledge_ttl_hours")]
    pub knowledge_ttl_hours: u32,

    /// Contexts above this confidence are marked for persistence
    #[serde(default = "default_persistence_confidence_threshold")]
    pub persistence_confidence_threshold: f64,

    /// Maximum recommendations returned per activation
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Inputs longer than this (in characters) are not classified
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,
}

impl DiscoveryConfig {
    /// Engine settings, with knowledge sources taken from the feature flags
    pub fn settings(&self, features: &FeatureFlags) -> DiscoverySettings {
        DiscoverySettings {
            knowledge_ttl: Duration::hours(i64::from(self.knowledge_ttl_hours)),
            persistence_confidence_threshold: self.persistence_confidence_threshold,
            max_recommendations: self.max_recommendations,
            max_input_length: self.max_input_length,
            knowledge_sources: features.knowledge_sources(),
        }
    }

    /// Validate discovery configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.knowledge_ttl_hours == 0 || self.knowledge_ttl_hours > MAX_KNOWLEDGE_TTL_HOURS {
            return Err(ConfigValidationError::InvalidKnowledgeTtl);
        }
        if !(0.0..=1.0).contains(&self.persistence_confidence_threshold) {
            return Err(ConfigValidationError::InvalidConfidenceThreshold(
                self.persistence_confidence_threshold,
            ));
        }
        if self.max_recommendations == 0 {
            return Err(ConfigValidationError::InvalidMaxRecommendations);
        }
        if self.max_input_length == 0 {
            return Err(ConfigValidationError::InvalidMaxInputLength);
        }
        Ok(())
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            knowledge_ttl_hours: default_knowledge_ttl_hours(),
            persistence_confidence_threshold: default_persistence_confidence_threshold(),
            max_recommendations: default_max_recommendations(),
            max_input_length: default_max_input_length(),
        }
    }
}

fn default_knowledge_ttl_hours() -> u32 {
    24
}

fn default_persistence_confidence_threshold() -> f64 {
    0.6
}

fn default_max_recommendations() -> usize {
    10
}

fn default_max_input_length() -> usize {
    100_000
}
