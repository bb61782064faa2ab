//! Pattern-based indicator extraction.
//!
//! Three families of word-bounded alternations are run over lower-cased text.
//! There is no stemming, so plurals such as "databases" do not match.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!(r"(?i)\b({})\b", p)).expect("valid indicator pattern"))
        .collect()
}

pub(crate) static TECHNOLOGY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"api|rest|graphql|webhook|database|sql|nosql|orm",
        r"react|vue|angular|node|python|java|docker|kubernetes",
        r"aws|azure|gcp|cloud|microservice|serverless",
        r"authentication|oauth|jwt|security|encryption",
        r"ml|ai|machine\s+learning|neural|nlp|llm",
    ])
});

pub(crate) static INDUSTRY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"healthcare|medical|patient|clinical|diagnosis|treatment",
        r"finance|banking|payment|trading|investment|fintech",
        r"manufacturing|supply\s+chain|inventory|production|logistics",
        r"retail|e-commerce|customer|sales|marketing|crm",
        r"education|learning|student|course|curriculum|assessment",
        r"government|public|citizen|policy|regulation|compliance",
    ])
});

pub(crate) static COMPLIANCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"gdpr|privacy|data\s+protection|consent|personal\s+data",
        r"hipaa|phi|hitech|medical\s+records|patient\s+privacy",
        r"sox|sarbanes|oxley|financial\s+reporting|audit",
        r"pci|dss|payment\s+card|credit\s+card\s+security",
        r"fda|medical\s+device|clinical\s+trial|drug\s+approval",
        r"iso|27001|security\s+standard|information\s+security",
    ])
});

fn push_matches(patterns: &[Regex], text: &str, out: &mut Vec<String>) {
    for pattern in patterns {
        out.extend(pattern.find_iter(text).map(|m| m.as_str().to_string()));
    }
}

pub(crate) fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Every technology, industry and compliance term in `text`, first-seen order.
pub fn extract_indicators(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut matches = Vec::new();
    push_matches(&TECHNOLOGY_PATTERNS, &lowered, &mut matches);
    push_matches(&INDUSTRY_PATTERNS, &lowered, &mut matches);
    push_matches(&COMPLIANCE_PATTERNS, &lowered, &mut matches);
    dedup_in_order(matches)
}

/// Technology terms only, in pattern order. Duplicates are kept.
pub fn technology_terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut matches = Vec::new();
    push_matches(&TECHNOLOGY_PATTERNS, &lowered, &mut matches);
    matches
}
