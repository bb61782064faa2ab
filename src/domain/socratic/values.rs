//! Value types produced by the Socratic engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A theme the user's answer touches on, detected by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    Business,
    Technical,
    UserExperience,
    Automation,
    RealTime,
    Security,
    Scale,
}

impl Concept {
    /// Wire name of the concept.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Technical => "technical",
            Self::UserExperience => "user_experience",
            Self::Automation => "automation",
            Self::RealTime => "real_time",
            Self::Security => "security",
            Self::Scale => "scale",
        }
    }

    /// Human-readable phrase for use inside a question.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Business => "the business side",
            Self::Technical => "the technical side",
            Self::UserExperience => "user experience",
            Self::Automation => "automation",
            Self::RealTime => "real-time behaviour",
            Self::Security => "security",
            Self::Scale => "scale",
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough size of a user answer, used to pick generic follow-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

/// Result of parsing one user answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResponse {
    pub original_input: String,
    /// Concepts in keyword-table order, not input order.
    pub identified_concepts: Vec<Concept>,
    pub entities: Vec<String>,
    pub complexity: Complexity,
    pub word_count: usize,
}

impl ParsedResponse {
    /// The concept the next question should focus on.
    pub fn primary_concept(&self) -> Option<Concept> {
        self.identified_concepts.first().copied()
    }
}

/// What prompted a generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// First question after category selection.
    InitialCategory,
    /// Generic follow-up when no concept was found.
    Clarifying,
    /// Follow-up on an identified concept.
    ConceptExploration,
    /// Question tailored to the inferred domain.
    DomainAware,
}

/// One generated question and what it was about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub kind: QuestionKind,
    /// Category, concept or domain name depending on `kind`.
    pub topic: String,
    pub question: String,
}

impl QuestionRecord {
    pub fn new(kind: QuestionKind, topic: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            kind,
            topic: topic.into(),
            question: question.into(),
        }
    }
}
