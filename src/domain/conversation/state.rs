//! Conversation state record.
//!
//! Holds everything the dialogue controller knows about one session. The
//! record has no business logic of its own: every mutator changes one field
//! and refreshes `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::socratic::{Concept, ParsedResponse, QuestionRecord};

use super::stage::WorkflowStage;

/// Who said a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: MessageRole,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// A design decision recorded during the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionEntry {
    pub decision: String,
    pub reasoning: String,
    pub timestamp: DateTime<Utc>,
}

/// Complete mutable state of one dialogue session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    stage: WorkflowStage,
    is_first_interaction: bool,
    selected_category: Option<String>,
    conversation_history: Vec<ConversationEntry>,
    extracted_concepts: Vec<Concept>,
    conversation_depth: u32,
    last_parsed_response: Option<ParsedResponse>,
    user_goal: Option<String>,
    gathered_requirements: BTreeMap<String, serde_json::Value>,
    research_findings: BTreeMap<String, serde_json::Value>,
    decision_history: Vec<DecisionEntry>,
    inquiry_focus_area: Option<String>,
    question_history: Vec<QuestionRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ConversationState {
    /// Creates the default record for a fresh session.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            stage: WorkflowStage::Framing,
            is_first_interaction: true,
            selected_category: None,
            conversation_history: Vec::new(),
            extracted_concepts: Vec::new(),
            conversation_depth: 0,
            last_parsed_response: None,
            user_goal: None,
            gathered_requirements: BTreeMap::new(),
            research_findings: BTreeMap::new(),
            decision_history: Vec::new(),
            inquiry_focus_area: None,
            question_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Discards all state, including timestamps.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // Stage

    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    /// Advances the stage. Moving backwards is rejected.
    pub fn set_stage(&mut self, stage: WorkflowStage) -> Result<(), ValidationError> {
        self.stage = self.stage.transition_to(stage)?;
        self.touch();
        Ok(())
    }

    // First interaction

    pub fn is_first_interaction(&self) -> bool {
        self.is_first_interaction
    }

    pub fn mark_first_interaction_complete(&mut self) {
        self.is_first_interaction = false;
        self.touch();
    }

    // Category

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = Some(category.into());
        self.touch();
    }

    // History

    pub fn conversation_history(&self) -> &[ConversationEntry] {
        &self.conversation_history
    }

    /// Appends a message. History is never rewritten.
    pub fn add_conversation_entry(&mut self, role: MessageRole, message: impl Into<String>) {
        self.conversation_history.push(ConversationEntry {
            role,
            message: message.into(),
            timestamp: Utc::now(),
        });
        self.touch();
    }

    // Concepts

    pub fn extracted_concepts(&self) -> &[Concept] {
        &self.extracted_concepts
    }

    /// Appends concepts not seen before, keeping first-seen order.
    pub fn add_extracted_concepts(&mut self, concepts: &[Concept]) {
        for concept in concepts {
            if !self.extracted_concepts.contains(concept) {
                self.extracted_concepts.push(*concept);
            }
        }
        self.touch();
    }

    // Depth

    pub fn conversation_depth(&self) -> u32 {
        self.conversation_depth
    }

    /// Increments the depth counter and returns the new value.
    pub fn increment_conversation_depth(&mut self) -> u32 {
        self.conversation_depth += 1;
        self.touch();
        self.conversation_depth
    }

    // Last parsed response

    pub fn last_parsed_response(&self) -> Option<&ParsedResponse> {
        self.last_parsed_response.as_ref()
    }

    pub fn set_last_parsed_response(&mut self, parsed: ParsedResponse) {
        self.last_parsed_response = Some(parsed);
        self.touch();
    }

    // Goal, requirements, research, decisions

    pub fn user_goal(&self) -> Option<&str> {
        self.user_goal.as_deref()
    }

    pub fn set_user_goal(&mut self, goal: impl Into<String>) {
        self.user_goal = Some(goal.into());
        self.touch();
    }

    pub fn gathered_requirements(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.gathered_requirements
    }

    /// Merges requirements; existing keys are overwritten.
    pub fn update_requirements(&mut self, requirements: BTreeMap<String, serde_json::Value>) {
        self.gathered_requirements.extend(requirements);
        self.touch();
    }

    pub fn research_findings(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.research_findings
    }

    pub fn add_research_finding(&mut self, key: impl Into<String>, data: serde_json::Value) {
        self.research_findings.insert(key.into(), data);
        self.touch();
    }

    pub fn decision_history(&self) -> &[DecisionEntry] {
        &self.decision_history
    }

    pub fn add_decision(&mut self, decision: impl Into<String>, reasoning: impl Into<String>) {
        self.decision_history.push(DecisionEntry {
            decision: decision.into(),
            reasoning: reasoning.into(),
            timestamp: Utc::now(),
        });
        self.touch();
    }

    // Inquiry bookkeeping

    pub fn inquiry_focus_area(&self) -> Option<&str> {
        self.inquiry_focus_area.as_deref()
    }

    pub fn set_inquiry_focus_area(&mut self, focus_area: impl Into<String>) {
        self.inquiry_focus_area = Some(focus_area.into());
        self.touch();
    }

    pub fn question_history(&self) -> &[QuestionRecord] {
        &self.question_history
    }

    pub fn add_question_record(&mut self, record: QuestionRecord) {
        self.question_history.push(record);
        self.touch();
    }

    // Timestamps

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
