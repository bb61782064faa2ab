//! Structured reply returned for every user turn.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::WorkflowStage;
use crate::domain::socratic::{Concept, WORKFLOW_CATEGORIES};

/// One controller reply. Optional fields are omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueResponse {
    pub message: String,
    pub stage: WorkflowStage,
    pub requires_selection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_concepts: Option<Vec<Concept>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_depth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl DialogueResponse {
    /// A reply with no optional fields set.
    pub fn new(message: impl Into<String>, stage: WorkflowStage) -> Self {
        Self {
            message: message.into(),
            stage,
            requires_selection: false,
            categories: None,
            selected_category: None,
            parsed_concepts: None,
            conversation_depth: None,
            domain: None,
        }
    }

    /// A reply that asks the user to pick a category from the menu.
    pub fn selection(message: impl Into<String>) -> Self {
        Self {
            requires_selection: true,
            categories: Some(WORKFLOW_CATEGORIES.iter().map(|c| c.to_string()).collect()),
            ..Self::new(message, WorkflowStage::Framing)
        }
    }
}
