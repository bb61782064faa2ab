//! Value types for domain discovery.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Domain name used when nothing more specific is known.
pub const GENERAL_DOMAIN: &str = "general";

/// Confidence assigned to fallback contexts.
pub const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Open key/value bag carried alongside a context.
pub type ContextMetadata = BTreeMap<String, serde_json::Value>;

/// Where a domain context came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DomainSource {
    #[default]
    Conversation,
    Mcp,
    WebSearch,
    Hybrid,
    Cached,
}

impl DomainSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conversation => "conversation",
            Self::Mcp => "mcp",
            Self::WebSearch => "web_search",
            Self::Hybrid => "hybrid",
            Self::Cached => "cached",
        }
    }
}

impl fmt::Display for DomainSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User expertise inferred from terminology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ExpertiseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainContext {
    pub domain: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    /// Matched indicator terms, deduplicated in first-seen order.
    pub indicators: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub source: DomainSource,
    #[serde(default)]
    pub metadata: ContextMetadata,
}

impl DomainContext {
    pub fn new(domain: impl Into<String>, confidence: f64, indicators: Vec<String>) -> Self {
        Self {
            domain: domain.into(),
            confidence,
            indicators,
            timestamp: Utc::now(),
            source: DomainSource::Conversation,
            metadata: ContextMetadata::new(),
        }
    }

    /// The `general` context used whenever analysis cannot produce a result.
    pub fn fallback() -> Self {
        Self::new(GENERAL_DOMAIN, FALLBACK_CONFIDENCE, Vec::new())
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Knowledge gathered about a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainKnowledge {
    pub domain: String,
    pub technologies: Vec<String>,
    pub concepts: Vec<String>,
    pub best_practices: Vec<String>,
    pub common_patterns: Vec<String>,
    pub compliance_frameworks: Vec<String>,
    pub sources: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl DomainKnowledge {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            technologies: Vec::new(),
            concepts: Vec::new(),
            best_practices: Vec::new(),
            common_patterns: Vec::new(),
            compliance_frameworks: Vec::new(),
            sources: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// True while the knowledge is younger than `ttl` at `now`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.last_updated) < ttl
    }
}

/// A domain context enriched with knowledge and inferred traits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedDomainContext {
    #[serde(flatten)]
    pub context: DomainContext,
    pub knowledge: DomainKnowledge,
    pub related_domains: Vec<String>,
    pub expertise_level: ExpertiseLevel,
    pub compliance_frameworks: Vec<String>,
}

impl EnhancedDomainContext {
    /// Wraps a context with empty enrichment.
    pub fn minimal(context: DomainContext) -> Self {
        Self {
            context,
            knowledge: DomainKnowledge::new(GENERAL_DOMAIN),
            related_domains: Vec::new(),
            expertise_level: ExpertiseLevel::default(),
            compliance_frameworks: Vec::new(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.context.domain
    }

    pub fn confidence(&self) -> f64 {
        self.context.confidence
    }

    pub fn metadata(&self) -> &ContextMetadata {
        &self.context.metadata
    }
}

/// Default provenance of recommended components.
pub const DEFAULT_COMPONENT_SOURCE: &str = "catalog";

/// A building block suggested for the user's workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecommendation {
    pub component_type: String,
    pub name: String,
    pub description: String,
    /// In `(0, 1]`.
    pub relevance_score: f64,
    pub domain_specific: bool,
    pub usage_patterns: Vec<String>,
    pub source: String,
}

impl ComponentRecommendation {
    pub fn new(
        component_type: &str,
        name: &str,
        description: &str,
        relevance_score: f64,
        domain_specific: bool,
        usage_patterns: &[&str],
    ) -> Self {
        Self {
            component_type: component_type.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            relevance_score,
            domain_specific,
            usage_patterns: usage_patterns.iter().map(|p| p.to_string()).collect(),
            source: DEFAULT_COMPONENT_SOURCE.to_string(),
        }
    }
}

/// Outcome of activating domain expertise for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainActivationResult {
    pub success: bool,
    pub domain_context: EnhancedDomainContext,
    pub recommendations: Vec<ComponentRecommendation>,
    pub persistence_key: String,
    pub error: Option<String>,
}

impl DomainActivationResult {
    /// A failed activation carrying the fallback context.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            domain_context: EnhancedDomainContext::minimal(DomainContext::fallback()),
            recommendations: Vec::new(),
            persistence_key: String::new(),
            error: Some(error.into()),
        }
    }
}
