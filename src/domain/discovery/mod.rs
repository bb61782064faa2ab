//! Discovery module - Domain detection and expertise activation.
//!
//! Free text is reduced to indicator terms, classified into a professional
//! domain, enriched with knowledge and inferred traits, and turned into
//! ranked component recommendations. `DomainDiscoveryEngine` ties the
//! stages together and keeps one active context per session.

mod classifier;
mod engine;
mod enricher;
mod errors;
mod indicators;
mod knowledge;
mod recommender;
mod values;

pub use classifier::{classify, classify_with_enhancement, Classification, DOMAIN_PRIORITY};
pub use engine::{
    DiscoverySettings, DomainDiscoveryEngine, DOMAIN_SWITCH_TIME_KEY, PREVIOUS_DOMAIN_KEY,
};
pub use enricher::{detect_compliance_frameworks, detect_related_domains, enrich, infer_expertise_level};
pub use errors::DiscoveryError;
pub use indicators::{extract_indicators, technology_terms};
pub use knowledge::{build_knowledge, knowledge_key};
pub use recommender::{recommend, DEFAULT_MAX_RECOMMENDATIONS};
pub use values::{
    ComponentRecommendation, ContextMetadata, DomainActivationResult, DomainContext,
    DomainKnowledge, DomainSource, EnhancedDomainContext, ExpertiseLevel, FALLBACK_CONFIDENCE,
    GENERAL_DOMAIN,
};
