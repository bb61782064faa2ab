//! Integration tests for the guided dialogue.
//!
//! These tests verify the end-to-end flow through `DialogueController`:
//! 1. Introduction and category menu on the first turn
//! 2. Category selection moving the session into inquiry
//! 3. Clarifying and domain-aware questions during inquiry
//! 4. Export, import and reset of the conversation state

use std::sync::Arc;

use socratic_architect::adapters::{InMemoryDomainContextStore, InMemoryKnowledgeStore};
use socratic_architect::application::{DialogueController, DialogueResponse, DialogueSettings};
use socratic_architect::domain::conversation::{MessageRole, WorkflowStage};
use socratic_architect::domain::discovery::{DiscoverySettings, DomainDiscoveryEngine};
use socratic_architect::domain::foundation::SessionId;
use socratic_architect::domain::socratic::Concept;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn discovery() -> Arc<DomainDiscoveryEngine> {
    Arc::new(DomainDiscoveryEngine::new(
        Arc::new(InMemoryDomainContextStore::new()),
        Arc::new(InMemoryKnowledgeStore::new()),
        DiscoverySettings::default(),
    ))
}

fn controller_with(settings: DialogueSettings) -> DialogueController {
    DialogueController::new(SessionId::generate(), discovery(), settings)
}

fn controller() -> DialogueController {
    controller_with(DialogueSettings::default())
}

/// A controller that has shown the menu and selected `selection`.
async fn in_inquiry(selection: &str, settings: DialogueSettings) -> DialogueController {
    let mut controller = controller_with(settings);
    controller.process_user_input("hello").await;
    let response = controller.process_user_input(selection).await;
    assert_eq!(response.stage, WorkflowStage::Inquiry);
    controller
}

// =============================================================================
// Framing
// =============================================================================

#[tokio::test]
async fn first_turn_always_asks_for_a_selection() {
    for opening in ["", "hello", "1", "I want a chatbot"] {
        let mut controller = controller();
        let response = controller.process_user_input(opening).await;

        assert!(response.requires_selection, "{:?}", opening);
        assert_eq!(response.stage, WorkflowStage::Framing);
        for category in ["chatbot", "data analysis", "RAG workflow", "content generation"] {
            assert!(response.message.contains(category));
        }
        assert!(!controller.state().is_first_interaction());
        assert_eq!(controller.state().selected_category(), None);
    }
}

#[tokio::test]
async fn each_number_selects_its_category() {
    let expected = ["chatbot", "data analysis", "RAG workflow", "content generation"];
    for (i, category) in expected.iter().enumerate() {
        let mut controller = controller();
        controller.process_user_input("hi").await;

        let response = controller.process_user_input(&(i + 1).to_string()).await;

        assert_eq!(response.selected_category.as_deref(), Some(*category));
        assert!(response.message.contains(&format!("**{}**", category)));
        assert_eq!(controller.state().stage(), WorkflowStage::Inquiry);
    }
}

#[tokio::test]
async fn retries_are_allowed_until_a_category_matches() {
    let mut controller = controller();
    controller.process_user_input("hi").await;

    let miss = controller.process_user_input("7").await;
    assert!(miss.requires_selection);
    let miss = controller.process_user_input("   ").await;
    assert!(miss.requires_selection);

    let hit = controller.process_user_input("Data Analysis").await;
    assert_eq!(hit.selected_category.as_deref(), Some("data analysis"));
    assert!(hit.message.ends_with("What type of data are you working with?"));
}

// =============================================================================
// Inquiry
// =============================================================================

#[tokio::test]
async fn inquiry_accumulates_concepts_without_duplicates() {
    let mut controller = in_inquiry("content generation", DialogueSettings::default()).await;

    let first = controller
        .process_user_input("It should automate our weekly newsletter task")
        .await;
    let second = controller
        .process_user_input("and automate the blog for our company")
        .await;

    assert_eq!(first.parsed_concepts, Some(vec![Concept::Automation]));
    assert_eq!(first.conversation_depth, Some(1));
    assert_eq!(
        second.parsed_concepts,
        Some(vec![Concept::Business, Concept::Automation])
    );
    assert_eq!(second.conversation_depth, Some(2));
    assert_eq!(
        controller.state().extracted_concepts(),
        &[Concept::Automation, Concept::Business]
    );
}

#[tokio::test]
async fn history_alternates_user_and_assistant() {
    let mut controller = in_inquiry("1", DialogueSettings::default()).await;
    controller.process_user_input("users want instant answers").await;

    let roles: Vec<MessageRole> = controller
        .state()
        .conversation_history()
        .iter()
        .map(|entry| entry.role)
        .collect();

    assert_eq!(roles.len(), 6);
    for pair in roles.chunks(2) {
        assert_eq!(pair, &[MessageRole::User, MessageRole::Assistant]);
    }
}

#[tokio::test]
async fn domain_aware_inquiry_tailors_questions_to_the_detected_domain() {
    let settings = DialogueSettings {
        domain_aware_inquiry: true,
        ..DialogueSettings::default()
    };
    let mut controller = in_inquiry("2", settings).await;

    let first = controller
        .process_user_input("We reconcile trading positions against banking ledgers")
        .await;
    let second = controller.process_user_input("It runs every night").await;

    assert_eq!(first.domain.as_deref(), Some("finance"));
    assert_eq!(
        first.message,
        "Which transactions or financial records will this workflow touch?"
    );
    assert_eq!(second.domain.as_deref(), Some("finance"));
    assert_eq!(
        second.message,
        "What audit or regulatory reporting does this need to support?"
    );
}

#[tokio::test]
async fn responses_serialize_without_absent_fields() {
    let mut controller = controller();
    let menu = controller.process_user_input("hi").await;
    let value = serde_json::to_value(&menu).unwrap();

    assert_eq!(value["stage"], "framing");
    assert_eq!(value["requires_selection"], true);
    assert_eq!(value["categories"].as_array().unwrap().len(), 4);
    assert!(value.get("domain").is_none());
    assert!(value.get("conversation_depth").is_none());

    let decoded: DialogueResponse = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, menu);
}

// =============================================================================
// State management
// =============================================================================

#[tokio::test]
async fn imported_state_continues_the_conversation() {
    let mut original = in_inquiry("RAG workflow", DialogueSettings::default()).await;
    original.process_user_input("Our documents are confidential").await;
    let document = original.export_state().unwrap();

    let mut resumed = controller();
    resumed.import_state(&document).unwrap();
    let response = resumed.process_user_input("They change every day").await;

    assert_eq!(response.stage, WorkflowStage::Inquiry);
    assert_eq!(response.conversation_depth, Some(2));
    assert_eq!(resumed.state().selected_category(), Some("RAG workflow"));
    assert_eq!(resumed.state().extracted_concepts(), &[Concept::Security]);
}

#[tokio::test]
async fn partial_state_documents_fill_in_defaults() {
    let mut controller = controller();
    controller
        .import_state(r#"{"stage": "inquiry", "is_first_interaction": false, "selected_category": "chatbot"}"#)
        .unwrap();

    assert_eq!(controller.state().stage(), WorkflowStage::Inquiry);
    assert!(controller.state().conversation_history().is_empty());
    assert_eq!(controller.state().conversation_depth(), 0);

    let response = controller.process_user_input("help users").await;
    assert_eq!(response.parsed_concepts, Some(vec![Concept::UserExperience]));
}

#[tokio::test]
async fn invalid_documents_are_rejected() {
    let mut controller = controller();
    controller.process_user_input("hi").await;

    assert!(controller.import_state("{").is_err());
    assert!(controller.import_state("\"text\"").is_err());
    assert!(controller.import_state(r#"{"stage": "deployment"}"#).is_err());
    assert!(!controller.state().is_first_interaction());
}

#[tokio::test]
async fn reset_starts_a_fresh_dialogue() {
    let mut controller = in_inquiry("4", DialogueSettings::default()).await;

    controller.reset().await;
    let response = controller.process_user_input("again").await;

    assert!(response.requires_selection);
    assert_eq!(controller.state().conversation_history().len(), 2);
    assert_eq!(controller.state().conversation_depth(), 0);
}
