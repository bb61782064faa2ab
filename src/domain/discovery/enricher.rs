//! Enrichment of a classified context with inferred traits.

use super::indicators::dedup_in_order;
use super::values::{DomainContext, DomainKnowledge, EnhancedDomainContext, ExpertiseLevel};

const RELATED_DOMAIN_TRIGGERS: &[(&[&str], &str)] = &[
    (&["api", "integration"], "integration"),
    (&["aws", "azure", "gcp", "cloud"], "cloud"),
    (&["security", "compliance"], "security"),
    (&["data", "analytics"], "data_analytics"),
];

const ADVANCED_TERMS: &[&str] = &["microservice", "kubernetes", "devops", "architecture", "distributed"];
const INTERMEDIATE_TERMS: &[&str] = &["api", "database", "framework", "integration", "authentication"];

/// Frameworks in reporting order, each with the terms that imply it.
const COMPLIANCE_TRIGGERS: &[(&[&str], &str)] = &[
    (&["hipaa", "healthcare"], "HIPAA"),
    (&["gdpr", "privacy"], "GDPR"),
    (&["sox", "sarbanes"], "SOX"),
    (&["pci", "payment"], "PCI-DSS"),
    (&["fda", "medical device"], "FDA"),
];

fn joined_lowercase<'a>(parts: impl IntoIterator<Item = &'a String>) -> String {
    parts
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Neighbouring domains suggested by the indicators.
pub fn detect_related_domains(indicators: &[String]) -> Vec<String> {
    let text = joined_lowercase(indicators);
    let related = RELATED_DOMAIN_TRIGGERS
        .iter()
        .filter(|(terms, _)| terms.iter().any(|t| text.contains(t)))
        .map(|(_, domain)| domain.to_string())
        .collect();
    dedup_in_order(related)
}

/// Expertise implied by how many advanced or intermediate terms appear.
pub fn infer_expertise_level(indicators: &[String]) -> ExpertiseLevel {
    let text = joined_lowercase(indicators);
    let count = |terms: &[&str]| terms.iter().filter(|t| text.contains(*t)).count();

    if count(ADVANCED_TERMS) > 2 {
        ExpertiseLevel::Advanced
    } else if count(INTERMEDIATE_TERMS) > 1 {
        ExpertiseLevel::Intermediate
    } else {
        ExpertiseLevel::Beginner
    }
}

/// Compliance frameworks implied by indicators and knowledge.
pub fn detect_compliance_frameworks(indicators: &[String], knowledge: &DomainKnowledge) -> Vec<String> {
    let text = joined_lowercase(
        indicators
            .iter()
            .chain(&knowledge.concepts)
            .chain(&knowledge.best_practices),
    );
    COMPLIANCE_TRIGGERS
        .iter()
        .filter(|(terms, _)| terms.iter().any(|t| text.contains(t)))
        .map(|(_, framework)| framework.to_string())
        .collect()
}

/// Combines a context with knowledge about its domain.
///
/// The knowledge's `compliance_frameworks` is filled with the detected list.
pub fn enrich(context: DomainContext, mut knowledge: DomainKnowledge) -> EnhancedDomainContext {
    let related_domains = detect_related_domains(&context.indicators);
    let expertise_level = infer_expertise_level(&context.indicators);
    let compliance_frameworks = detect_compliance_frameworks(&context.indicators, &knowledge);
    knowledge.compliance_frameworks = compliance_frameworks.clone();

    EnhancedDomainContext {
        context,
        knowledge,
        related_domains,
        expertise_level,
        compliance_frameworks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discovery::knowledge::build_knowledge;

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    mod related_domains {
        use super::*;

        #[test]
        fn cross_domain_terms_are_detected() {
            let related = detect_related_domains(&terms(&["api", "aws", "security", "analytics"]));
            assert_eq!(related, terms(&["integration", "cloud", "security", "data_analytics"]));
        }

        #[test]
        fn substring_matches_count() {
            // "personal data" contains "data"
            let related = detect_related_domains(&terms(&["personal data"]));
            assert_eq!(related, terms(&["data_analytics"]));
        }

        #[test]
        fn nothing_related_for_plain_industry_terms() {
            assert!(detect_related_domains(&terms(&["patient", "clinical"])).is_empty());
        }
    }

    mod expertise {
        use super::*;

        #[test]
        fn no_technical_terms_is_beginner() {
            assert_eq!(
                infer_expertise_level(&terms(&["simple", "basic", "workflow"])),
                ExpertiseLevel::Beginner
            );
        }

        #[test]
        fn two_intermediate_terms_is_intermediate() {
            assert_eq!(
                infer_expertise_level(&terms(&["api", "database", "integration"])),
                ExpertiseLevel::Intermediate
            );
        }

        #[test]
        fn three_advanced_terms_is_advanced() {
            assert_eq!(
                infer_expertise_level(&terms(&["microservice", "kubernetes", "distributed", "architecture"])),
                ExpertiseLevel::Advanced
            );
        }

        #[test]
        fn a_single_intermediate_term_is_still_beginner() {
            assert_eq!(infer_expertise_level(&terms(&["api"])), ExpertiseLevel::Beginner);
        }
    }

    mod compliance {
        use super::*;

        #[test]
        fn frameworks_come_from_indicators() {
            let frameworks = detect_compliance_frameworks(
                &terms(&["hipaa", "privacy", "payment card"]),
                &build_knowledge(&[], &[]),
            );
            assert_eq!(frameworks, terms(&["HIPAA", "GDPR", "PCI-DSS"]));
        }

        #[test]
        fn best_practices_can_imply_a_framework() {
            // "HIPAA compliance required" comes from the healthcare knowledge
            let knowledge = build_knowledge(&terms(&["medical"]), &[]);
            let frameworks = detect_compliance_frameworks(&terms(&["clinical"]), &knowledge);
            assert_eq!(frameworks, terms(&["HIPAA"]));
        }

        #[test]
        fn each_framework_appears_once_in_fixed_order() {
            let frameworks = detect_compliance_frameworks(
                &terms(&["fda", "sox", "healthcare", "hipaa", "sarbanes"]),
                &build_knowledge(&[], &[]),
            );
            assert_eq!(frameworks, terms(&["HIPAA", "SOX", "FDA"]));
        }
    }

    #[test]
    fn enrich_fills_every_field_and_mirrors_frameworks_into_knowledge() {
        let context = DomainContext::new("healthcare", 0.8, terms(&["patient", "hipaa", "api", "database"]));
        let knowledge = build_knowledge(&terms(&["healthcare"]), &[]);

        let enhanced = enrich(context, knowledge);

        assert_eq!(enhanced.domain(), "healthcare");
        assert_eq!(enhanced.confidence(), 0.8);
        assert_eq!(enhanced.related_domains, terms(&["integration", "data_analytics"]));
        assert_eq!(enhanced.expertise_level, ExpertiseLevel::Intermediate);
        assert_eq!(enhanced.compliance_frameworks, terms(&["HIPAA"]));
        assert_eq!(enhanced.knowledge.compliance_frameworks, terms(&["HIPAA"]));
    }
}
