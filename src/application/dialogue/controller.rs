//! DialogueController - Turns raw user text into structured dialogue replies.
//!
//! The controller owns one session's conversation state and question engine.
//! Each turn appends the user message, dispatches on the current stage, and
//! appends the reply, so the history always alternates user/assistant.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::conversation::{ConversationState, MessageRole, StateFormatError, WorkflowStage};
use crate::domain::discovery::DomainDiscoveryEngine;
use crate::domain::foundation::SessionId;
use crate::domain::socratic::{
    category_menu, parse_response, SocraticEngine, DEFAULT_RECENT_WINDOW, WORKFLOW_CATEGORIES,
};

use super::response::DialogueResponse;

/// Category used for follow-ups when none has been selected.
const FALLBACK_CATEGORY: &str = "general";

const INTRODUCTION: &str = "Hello! I'm the **Socratic Architect**, your partner for designing \
workflow automations. I'll guide you from a rough idea to a concrete workflow design \
through focused questions.\n\n\
First I'll work to understand your goals, then we'll explore the options together. \
Along the way I'll ask clarifying questions and point out practices that tend to work well.";

/// Dialogue behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueSettings {
    pub recent_history_window: usize,
    /// Use domain-aware questions during inquiry.
    pub domain_aware_inquiry: bool,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            recent_history_window: DEFAULT_RECENT_WINDOW,
            domain_aware_inquiry: false,
        }
    }
}

impl From<&AppConfig> for DialogueSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            recent_history_window: config.dialogue.recent_history_window,
            domain_aware_inquiry: config.features.domain_aware_inquiry,
        }
    }
}

/// Maps a menu reply to a category.
///
/// A number selects by 1-based position. Anything else matches the first
/// category that contains the reply or is contained in it, ignoring case.
/// Blank replies never match.
pub fn parse_category_selection(input: &str) -> Option<&'static str> {
    let selection = input.trim().to_lowercase();
    if selection.is_empty() {
        return None;
    }

    if selection.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(number) = selection.parse::<usize>() {
            if (1..=WORKFLOW_CATEGORIES.len()).contains(&number) {
                return Some(WORKFLOW_CATEGORIES[number - 1]);
            }
        }
    }

    WORKFLOW_CATEGORIES.iter().copied().find(|category| {
        let name = category.to_lowercase();
        selection.contains(&name) || name.contains(&selection)
    })
}

/// Drives one session's dialogue.
pub struct DialogueController {
    session_id: SessionId,
    state: ConversationState,
    discovery: Arc<DomainDiscoveryEngine>,
    engine: SocraticEngine,
    settings: DialogueSettings,
}

impl DialogueController {
    pub fn new(
        session_id: SessionId,
        discovery: Arc<DomainDiscoveryEngine>,
        settings: DialogueSettings,
    ) -> Self {
        let engine =
            SocraticEngine::new(discovery.clone()).with_recent_window(settings.recent_history_window);
        Self {
            session_id,
            state: ConversationState::new(),
            discovery,
            engine,
            settings,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn engine(&self) -> &SocraticEngine {
        &self.engine
    }

    pub fn settings(&self) -> &DialogueSettings {
        &self.settings
    }

    /// Handles one user turn. Always returns a well-formed reply.
    pub async fn process_user_input(&mut self, input: &str) -> DialogueResponse {
        self.state.add_conversation_entry(MessageRole::User, input);

        let response = if self.state.is_first_interaction() {
            self.handle_first_interaction()
        } else {
            match self.state.stage() {
                WorkflowStage::Framing => self.handle_framing(input),
                WorkflowStage::Inquiry => self.handle_inquiry(input).await,
                stage => Self::handle_unimplemented(stage),
            }
        };

        self.state
            .add_conversation_entry(MessageRole::Assistant, response.message.as_str());
        response
    }

    /// Opens the dialogue with the introduction and category menu.
    ///
    /// Unlike a first `process_user_input`, no user entry is recorded, so the
    /// history starts with the assistant's greeting.
    pub fn greet(&mut self) -> DialogueResponse {
        let response = self.handle_first_interaction();
        self.state
            .add_conversation_entry(MessageRole::Assistant, response.message.as_str());
        response
    }

    /// Starts the session over, dropping its active domain context.
    pub async fn reset(&mut self) {
        self.state.reset();
        self.engine.reset();
        self.discovery.deactivate_domain_expertise(&self.session_id).await;
        info!(session_id = %self.session_id, "Conversation reset");
    }

    pub fn export_state(&self) -> Result<String, StateFormatError> {
        self.state.export()
    }

    /// Replaces the conversation state. On error nothing changes.
    pub fn import_state(&mut self, document: &str) -> Result<(), StateFormatError> {
        self.state.import(document)?;
        debug!(session_id = %self.session_id, stage = %self.state.stage(), "Conversation state imported");
        Ok(())
    }

    fn handle_first_interaction(&mut self) -> DialogueResponse {
        self.state.mark_first_interaction_complete();
        DialogueResponse::selection(format!("{}\n\n{}", INTRODUCTION, category_menu()))
    }

    fn handle_framing(&mut self, input: &str) -> DialogueResponse {
        let Some(category) = parse_category_selection(input) else {
            debug!(session_id = %self.session_id, "Category selection not understood");
            return DialogueResponse::selection(format!(
                "I didn't understand your selection. {}",
                category_menu()
            ));
        };

        self.state.set_selected_category(category);
        if let Err(e) = self.state.set_stage(WorkflowStage::Inquiry) {
            warn!(session_id = %self.session_id, error = %e, "Could not enter inquiry stage");
        }
        info!(session_id = %self.session_id, category, "Workflow category selected");

        let recorded = self.engine.question_history().len();
        let question = self.engine.generate_initial_question(category);
        self.copy_new_question_records(recorded);

        DialogueResponse {
            selected_category: Some(category.to_string()),
            ..DialogueResponse::new(
                format!("Great choice! You've selected **{}**.\n\n{}", category, question),
                self.state.stage(),
            )
        }
    }

    async fn handle_inquiry(&mut self, input: &str) -> DialogueResponse {
        let parsed = parse_response(input);
        self.state.set_last_parsed_response(parsed.clone());
        self.state.add_extracted_concepts(&parsed.identified_concepts);
        let depth = self.state.increment_conversation_depth();

        let category = self
            .state
            .selected_category()
            .unwrap_or(FALLBACK_CATEGORY)
            .to_string();
        let recorded = self.engine.question_history().len();

        let (question, domain) = if self.settings.domain_aware_inquiry {
            let dynamic = self
                .engine
                .generate_dynamic_question(
                    input,
                    &self.session_id,
                    self.state.conversation_history(),
                    &category,
                )
                .await;
            (dynamic.question, dynamic.domain)
        } else {
            let question = self.engine.generate_clarifying_question(
                &parsed,
                self.state.conversation_history(),
                &category,
            );
            (question, None)
        };
        self.copy_new_question_records(recorded);

        DialogueResponse {
            parsed_concepts: Some(parsed.identified_concepts),
            conversation_depth: Some(depth),
            domain,
            ..DialogueResponse::new(question, WorkflowStage::Inquiry)
        }
    }

    fn handle_unimplemented(stage: WorkflowStage) -> DialogueResponse {
        DialogueResponse::new(
            format!(
                "Processing input for {} stage. (Placeholder for future implementation)",
                stage
            ),
            stage,
        )
    }

    fn copy_new_question_records(&mut self, from: usize) {
        for record in self.engine.question_history().iter().skip(from) {
            self.state.add_question_record(record.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryDomainContextStore, InMemoryKnowledgeStore};
    use crate::domain::discovery::DiscoverySettings;
    use crate::domain::socratic::{Concept, QuestionKind};

    fn discovery() -> Arc<DomainDiscoveryEngine> {
        Arc::new(DomainDiscoveryEngine::new(
            Arc::new(InMemoryDomainContextStore::new()),
            Arc::new(InMemoryKnowledgeStore::new()),
            DiscoverySettings::default(),
        ))
    }

    fn controller_with(settings: DialogueSettings) -> DialogueController {
        DialogueController::new(SessionId::new("test-session").unwrap(), discovery(), settings)
    }

    fn controller() -> DialogueController {
        controller_with(DialogueSettings::default())
    }

    mod category_selection {
        use super::*;

        #[test]
        fn numbers_select_by_position() {
            assert_eq!(parse_category_selection("1"), Some("chatbot"));
            assert_eq!(parse_category_selection(" 2 "), Some("data analysis"));
            assert_eq!(parse_category_selection("3"), Some("RAG workflow"));
            assert_eq!(parse_category_selection("4"), Some("content generation"));
        }

        #[test]
        fn out_of_range_numbers_do_not_match() {
            assert_eq!(parse_category_selection("0"), None);
            assert_eq!(parse_category_selection("5"), None);
            assert_eq!(parse_category_selection("99999999999999999999999"), None);
        }

        #[test]
        fn names_match_in_either_direction() {
            assert_eq!(parse_category_selection("I want a Chatbot please"), Some("chatbot"));
            assert_eq!(parse_category_selection("rag"), Some("RAG workflow"));
            assert_eq!(parse_category_selection("CONTENT"), Some("content generation"));
        }

        #[test]
        fn blank_and_unrelated_input_do_not_match() {
            assert_eq!(parse_category_selection(""), None);
            assert_eq!(parse_category_selection("   "), None);
            assert_eq!(parse_category_selection("spreadsheet macros"), None);
        }
    }

    mod turns {
        use super::*;

        #[tokio::test]
        async fn first_turn_introduces_and_lists_categories() {
            let mut controller = controller();

            let response = controller.process_user_input("hello").await;

            assert!(response.requires_selection);
            assert_eq!(response.stage, WorkflowStage::Framing);
            assert!(response.message.contains("Socratic Architect"));
            let positions: Vec<usize> = WORKFLOW_CATEGORIES
                .iter()
                .map(|c| response.message.find(&format!(". {}", c)).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert!(!controller.state().is_first_interaction());
            assert_eq!(controller.state().conversation_history().len(), 2);
        }

        #[tokio::test]
        async fn numeric_selection_enters_inquiry() {
            let mut controller = controller();
            controller.process_user_input("hi").await;

            let response = controller.process_user_input("1").await;

            assert_eq!(response.stage, WorkflowStage::Inquiry);
            assert_eq!(response.selected_category.as_deref(), Some("chatbot"));
            assert!(!response.requires_selection);
            assert!(response.message.contains("**chatbot**"));
            assert!(response
                .message
                .ends_with("What kind of conversations do you want your chatbot to have with users?"));
            assert_eq!(controller.state().stage(), WorkflowStage::Inquiry);
            assert_eq!(controller.state().selected_category(), Some("chatbot"));
            assert_eq!(
                controller.state().question_history()[0].kind,
                QuestionKind::InitialCategory
            );
        }

        #[tokio::test]
        async fn unrecognized_selection_stays_in_framing() {
            let mut controller = controller();
            controller.process_user_input("hi").await;

            let response = controller.process_user_input("something else entirely").await;

            assert!(response.requires_selection);
            assert_eq!(response.stage, WorkflowStage::Framing);
            assert!(response.message.starts_with("I didn't understand your selection."));
            assert!(response.categories.is_some());
            assert_eq!(controller.state().selected_category(), None);
        }

        #[tokio::test]
        async fn inquiry_turn_tracks_concepts_and_depth() {
            let mut controller = controller();
            controller.process_user_input("hi").await;
            controller.process_user_input("2").await;

            let response = controller
                .process_user_input("We need a secure api for our business")
                .await;

            assert_eq!(response.stage, WorkflowStage::Inquiry);
            assert_eq!(
                response.parsed_concepts,
                Some(vec![Concept::Business, Concept::Technical, Concept::Security])
            );
            assert_eq!(response.conversation_depth, Some(1));
            assert_eq!(response.message, "How does this fit into your business goals?");
            assert!(response.domain.is_none());
            assert_eq!(
                controller.state().extracted_concepts(),
                &[Concept::Business, Concept::Technical, Concept::Security]
            );
            assert!(controller.state().last_parsed_response().is_some());
        }

        #[tokio::test]
        async fn concept_follow_ups_do_not_repeat_until_pool_is_exhausted() {
            let mut controller = controller();
            controller.process_user_input("hi").await;
            controller.process_user_input("chatbot").await;

            let mut asked = Vec::new();
            for _ in 0..3 {
                asked.push(controller.process_user_input("the api").await.message);
            }
            let mut unique = asked.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 3);

            let fourth = controller.process_user_input("the api").await.message;
            assert!(asked.contains(&fourth));
        }

        #[tokio::test]
        async fn unimplemented_stage_gets_placeholder() {
            let mut controller = controller();
            controller
                .import_state(r#"{"stage": "research", "is_first_interaction": false}"#)
                .unwrap();

            let response = controller.process_user_input("anything").await;

            assert_eq!(response.stage, WorkflowStage::Research);
            assert_eq!(
                response.message,
                "Processing input for research stage. (Placeholder for future implementation)"
            );
        }

        #[tokio::test]
        async fn domain_aware_inquiry_reports_domain() {
            let mut controller = controller_with(DialogueSettings {
                domain_aware_inquiry: true,
                ..DialogueSettings::default()
            });
            controller.process_user_input("hi").await;
            controller.process_user_input("2").await;

            let response = controller
                .process_user_input("We analyse patient medical records for our clinic")
                .await;

            assert_eq!(response.domain.as_deref(), Some("healthcare"));
            assert_eq!(
                response.message,
                "Will this workflow handle protected health information or patient records?"
            );
            assert_eq!(
                controller.state().question_history().last().unwrap().kind,
                QuestionKind::DomainAware
            );
        }
    }

    mod state_management {
        use super::*;

        #[tokio::test]
        async fn reset_returns_to_first_interaction() {
            let mut controller = controller();
            controller.process_user_input("hi").await;
            controller.process_user_input("1").await;

            controller.reset().await;

            assert!(controller.state().is_first_interaction());
            assert_eq!(controller.state().stage(), WorkflowStage::Framing);
            assert!(controller.state().conversation_history().is_empty());
            assert!(controller.engine().question_history().is_empty());
            assert!(controller.process_user_input("hi again").await.requires_selection);
        }

        #[tokio::test]
        async fn reset_drops_the_detected_domain() {
            let mut controller = controller_with(DialogueSettings {
                domain_aware_inquiry: true,
                ..DialogueSettings::default()
            });
            controller.process_user_input("hi").await;
            controller.process_user_input("1").await;
            let before = controller.process_user_input("patient medical records").await;
            assert_eq!(before.domain.as_deref(), Some("healthcare"));

            controller.reset().await;
            controller.process_user_input("hi").await;
            controller.process_user_input("1").await;
            let after = controller
                .process_user_input("a trading desk for banking payments")
                .await;

            assert_eq!(after.domain.as_deref(), Some("finance"));
        }

        #[tokio::test]
        async fn greeting_records_no_user_entry() {
            let mut controller = controller();

            let greeting = controller.greet();

            assert!(greeting.requires_selection);
            assert!(greeting.message.contains("Socratic Architect"));
            assert!(!controller.state().is_first_interaction());
            let history = controller.state().conversation_history();
            assert_eq!(history.len(), 1);
            assert_eq!(history[0].role, MessageRole::Assistant);

            let response = controller.process_user_input("2").await;
            assert_eq!(response.selected_category.as_deref(), Some("data analysis"));
        }

        #[tokio::test]
        async fn exported_state_imports_into_another_controller() {
            let mut source = controller();
            source.process_user_input("hi").await;
            source.process_user_input("3").await;
            source.process_user_input("Documents must stay private").await;
            let document = source.export_state().unwrap();

            let mut target = controller();
            target.import_state(&document).unwrap();

            assert_eq!(target.state(), source.state());
        }

        #[tokio::test]
        async fn malformed_import_leaves_state_untouched() {
            let mut controller = controller();
            controller.process_user_input("hi").await;
            let before = controller.state().clone();

            assert!(controller.import_state("not json").is_err());
            assert!(controller.import_state("[1, 2]").is_err());
            assert_eq!(controller.state(), &before);
        }
    }
}
