//! Domain knowledge built from hints.
//!
//! Knowledge is keyed by the first hint. The builder is pure; caching and
//! freshness are handled by the discovery engine through `KnowledgeStore`.

use super::indicators::{dedup_in_order, technology_terms};
use super::values::{DomainKnowledge, DomainSource, GENERAL_DOMAIN};

const CONCEPT_TRIGGERS: &[(&str, &[&str])] = &[
    ("api", &["integration", "service", "endpoint"]),
    ("database", &["data storage", "persistence", "query"]),
    ("security", &["authentication", "authorization", "encryption"]),
];

/// Best practices per domain trigger. Only the first matching entry applies.
const BEST_PRACTICE_TRIGGERS: &[(&[&str], &[&str])] = &[
    (
        &["healthcare", "medical"],
        &[
            "HIPAA compliance required",
            "Patient data protection",
            "Audit trail implementation",
        ],
    ),
    (
        &["finance", "banking"],
        &[
            "Financial data encryption",
            "Transaction audit logs",
            "Regulatory compliance",
        ],
    ),
];

/// Cache key for a list of hints.
pub fn knowledge_key(hints: &[String]) -> &str {
    hints.first().map(String::as_str).unwrap_or(GENERAL_DOMAIN)
}

/// Builds knowledge from hints.
///
/// `extra_sources` are appended to `sources` after `conversation`.
pub fn build_knowledge(hints: &[String], extra_sources: &[String]) -> DomainKnowledge {
    let mut knowledge = DomainKnowledge::new(knowledge_key(hints));
    let mut technologies = Vec::new();
    let mut concepts = Vec::new();
    let mut best_practices = Vec::new();

    for hint in hints {
        let lowered = hint.to_lowercase();

        technologies.extend(technology_terms(&lowered));

        for (trigger, triggered) in CONCEPT_TRIGGERS {
            if lowered.contains(trigger) {
                concepts.extend(triggered.iter().map(|c| c.to_string()));
            }
        }

        if let Some((_, practices)) = BEST_PRACTICE_TRIGGERS
            .iter()
            .find(|(terms, _)| terms.iter().any(|t| lowered.contains(t)))
        {
            best_practices.extend(practices.iter().map(|p| p.to_string()));
        }
    }

    knowledge.technologies = dedup_in_order(technologies);
    knowledge.concepts = dedup_in_order(concepts);
    knowledge.best_practices = dedup_in_order(best_practices);

    let mut sources = vec![DomainSource::Conversation.as_str().to_string()];
    sources.extend(extra_sources.iter().cloned());
    knowledge.sources = dedup_in_order(sources);

    knowledge
}
