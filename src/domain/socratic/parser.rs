//! Keyword-based parsing of free-text answers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::question_bank::CONCEPT_KEYWORDS;
use super::values::{Complexity, Concept, ParsedResponse};

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("valid regex"));

static CAPITALIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").expect("valid regex"));

const ENTITY_STOPWORDS: &[&str] = &["I", "The", "A", "An", "This", "That", "These", "Those"];

/// Parses one user answer into concepts, entities and a complexity label.
pub fn parse_response(input: &str) -> ParsedResponse {
    ParsedResponse {
        original_input: input.to_string(),
        identified_concepts: identify_concepts(input),
        entities: extract_entities(input),
        complexity: assess_complexity(input),
        word_count: input.split_whitespace().count(),
    }
}

/// Concepts whose keywords appear in the input, in keyword-table order.
pub fn identify_concepts(input: &str) -> Vec<Concept> {
    let lowered = input.to_lowercase();
    CONCEPT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(concept, _)| *concept)
        .collect()
}

/// Quoted phrases followed by capitalized words, deduplicated in first-seen order.
pub fn extract_entities(input: &str) -> Vec<String> {
    let quoted = QUOTED
        .captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());
    let capitalized = CAPITALIZED
        .find_iter(input)
        .map(|m| m.as_str())
        .filter(|word| !ENTITY_STOPWORDS.contains(word));

    let mut entities: Vec<String> = Vec::new();
    for entity in quoted.chain(capitalized) {
        if !entities.iter().any(|e| e == entity) {
            entities.push(entity.to_string());
        }
    }
    entities
}

/// Sizes an answer by word and sentence count.
pub fn assess_complexity(input: &str) -> Complexity {
    let words = input.split_whitespace().count();
    let sentences = input.split('.').filter(|s| !s.trim().is_empty()).count();

    if words < 10 && sentences <= 1 {
        Complexity::Low
    } else if words > 30 || sentences > 3 {
        Complexity::High
    } else {
        Complexity::Medium
    }
}
