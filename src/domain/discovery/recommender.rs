//! Component recommendations for an enhanced context.
//!
//! Four generators contribute candidates: the domain itself, each known
//! technology, each common pattern and each compliance framework. The
//! combined list is ranked domain-specific first, then by relevance.

use std::cmp::Ordering;

use super::errors::DiscoveryError;
use super::values::{ComponentRecommendation, EnhancedDomainContext};

/// Default cap on the number of recommendations returned.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 10;

/// Base components for a domain.
pub fn components_for_domain(domain: &str) -> Vec<ComponentRecommendation> {
    match domain {
        "technology" | "api" | "integration" => vec![
            ComponentRecommendation::new(
                "api_connector",
                "HTTP Request",
                "Make HTTP API calls with authentication",
                0.9,
                true,
                &["api-integration", "external-service"],
            ),
            ComponentRecommendation::new(
                "data_transformer",
                "JSON Processor",
                "Parse and transform JSON data",
                0.8,
                true,
                &["data-processing", "api-response"],
            ),
        ],
        "healthcare" => vec![
            ComponentRecommendation::new(
                "data_validator",
                "HIPAA Validator",
                "Validate data for HIPAA compliance",
                0.95,
                true,
                &["compliance", "data-validation"],
            ),
            ComponentRecommendation::new(
                "audit_logger",
                "Audit Trail Logger",
                "Log actions for compliance auditing",
                0.9,
                true,
                &["compliance", "audit"],
            ),
        ],
        "finance" => vec![
            ComponentRecommendation::new(
                "encryption",
                "Financial Data Encryptor",
                "Encrypt sensitive financial data",
                0.95,
                true,
                &["security", "compliance"],
            ),
            ComponentRecommendation::new(
                "transaction_processor",
                "Transaction Validator",
                "Validate financial transactions",
                0.9,
                true,
                &["validation", "transaction"],
            ),
        ],
        _ => Vec::new(),
    }
}

/// Components for one technology term.
pub fn components_for_technology(technology: &str) -> Vec<ComponentRecommendation> {
    let lowered = technology.to_lowercase();
    let mut components = Vec::new();

    if lowered.contains("python") {
        components.push(ComponentRecommendation::new(
            "code_executor",
            "Python Code",
            "Execute Python code snippets",
            0.85,
            false,
            &["scripting", "data-analysis"],
        ));
    }
    if lowered.contains("database") {
        components.push(ComponentRecommendation::new(
            "database_connector",
            "Database Query",
            "Execute database queries",
            0.9,
            false,
            &["data-access", "query"],
        ));
    }

    components
}

/// Components for one common pattern.
pub fn components_for_pattern(pattern: &str) -> Vec<ComponentRecommendation> {
    let lowered = pattern.to_lowercase();
    let mut components = Vec::new();

    if lowered.contains("authentication") {
        components.push(ComponentRecommendation::new(
            "auth_handler",
            "OAuth Authenticator",
            "Handle OAuth authentication flows",
            0.9,
            true,
            &["security", "user-auth"],
        ));
    }
    if lowered.contains("validation") {
        components.push(ComponentRecommendation::new(
            "validator",
            "Data Validator",
            "Validate data against schemas",
            0.8,
            false,
            &["validation", "data-quality"],
        ));
    }

    components
}

/// Components required by a compliance framework.
pub fn components_for_compliance(framework: &str) -> Vec<ComponentRecommendation> {
    match framework {
        "HIPAA" => vec![
            ComponentRecommendation::new(
                "phi_handler",
                "PHI Data Handler",
                "Handle Protected Health Information securely",
                0.95,
                true,
                &["hipaa", "healthcare"],
            ),
            ComponentRecommendation::new(
                "access_logger",
                "Access Log Monitor",
                "Monitor and log data access for HIPAA compliance",
                0.9,
                true,
                &["audit", "compliance"],
            ),
        ],
        "GDPR" => vec![ComponentRecommendation::new(
            "consent_manager",
            "Consent Manager",
            "Manage user consent for data processing",
            0.9,
            true,
            &["gdpr", "privacy"],
        )],
        _ => Vec::new(),
    }
}

/// Validates, ranks and truncates candidates.
///
/// The sort is stable, so candidates with equal keys keep generator order.
pub fn rank(
    mut candidates: Vec<ComponentRecommendation>,
    max: usize,
) -> Result<Vec<ComponentRecommendation>, DiscoveryError> {
    if let Some(invalid) = candidates
        .iter()
        .find(|c| !(c.relevance_score > 0.0 && c.relevance_score <= 1.0))
    {
        return Err(DiscoveryError::RecommendationFailure {
            name: invalid.name.clone(),
            score: invalid.relevance_score,
        });
    }

    candidates.sort_by(|a, b| {
        b.domain_specific.cmp(&a.domain_specific).then_with(|| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        })
    });
    candidates.truncate(max);
    Ok(candidates)
}

/// Collects candidates from every generator and ranks them.
pub fn recommend(
    context: &EnhancedDomainContext,
    max: usize,
) -> Result<Vec<ComponentRecommendation>, DiscoveryError> {
    let mut candidates = components_for_domain(context.domain());
    for technology in &context.knowledge.technologies {
        candidates.extend(components_for_technology(technology));
    }
    for pattern in &context.knowledge.common_patterns {
        candidates.extend(components_for_pattern(pattern));
    }
    for framework in &context.compliance_frameworks {
        candidates.extend(components_for_compliance(framework));
    }
    rank(candidates, max)
}
