//! Socratic module - Question generation for the guided dialogue.
//!
//! Static question banks, a keyword-based answer parser, the non-repeating
//! selection rule, and `SocraticEngine`, which combines them with domain
//! discovery to pick the next question.

mod engine;
mod parser;
mod question_bank;
mod selector;
mod values;

pub use engine::{domain_aware_question, DomainInsights, DomainSwitchOutcome, DynamicQuestion, SocraticEngine};
pub use parser::{assess_complexity, extract_entities, identify_concepts, parse_response};
pub use question_bank::{
    category_menu, concept_questions, domain_questions, fallback_questions, initial_questions,
    EMPTY_POOL_QUESTION, UNKNOWN_CATEGORY_QUESTION, WORKFLOW_CATEGORIES,
};
pub use selector::{select_non_repetitive, DEFAULT_RECENT_WINDOW};
pub use values::{Complexity, Concept, ParsedResponse, QuestionKind, QuestionRecord};
