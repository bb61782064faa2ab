//! Export and import of conversation state.
//!
//! The canonical form is a pretty-printed JSON object whose keys are the
//! state's field names. Timestamps are RFC 3339 strings. Importing overlays
//! the provided keys on a default record, so a partial document is valid and
//! missing fields take their defaults.

use thiserror::Error;

use super::state::ConversationState;

/// Errors raised while exporting or importing state.
#[derive(Debug, Error)]
pub enum StateFormatError {
    #[error("Invalid state document: {0}")]
    Malformed(String),

    #[error("State document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Failed to encode state: {0}")]
    Encode(String),
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl ConversationState {
    /// Exports the full state.
    pub fn export(&self) -> Result<String, StateFormatError> {
        serde_json::to_string_pretty(self).map_err(|e| StateFormatError::Encode(e.to_string()))
    }

    /// Replaces this state with the decoded document.
    ///
    /// On any error the current state is left untouched.
    pub fn import(&mut self, document: &str) -> Result<(), StateFormatError> {
        *self = Self::decode(document)?;
        Ok(())
    }

    /// Decodes a document into a new state, without touching any existing one.
    pub fn decode(document: &str) -> Result<Self, StateFormatError> {
        let provided: serde_json::Value = serde_json::from_str(document)
            .map_err(|e| StateFormatError::Malformed(e.to_string()))?;

        let provided = match provided {
            serde_json::Value::Object(fields) => fields,
            other => return Err(StateFormatError::NotAnObject(json_kind(&other))),
        };

        let mut merged = match serde_json::to_value(Self::new()) {
            Ok(serde_json::Value::Object(defaults)) => defaults,
            Ok(other) => return Err(StateFormatError::NotAnObject(json_kind(&other))),
            Err(e) => return Err(StateFormatError::Encode(e.to_string())),
        };
        merged.extend(provided);

        serde_json::from_value(serde_json::Value::Object(merged))
            .map_err(|e| StateFormatError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{MessageRole, WorkflowStage};
    use crate::domain::socratic::{Complexity, Concept, ParsedResponse, QuestionKind, QuestionRecord};
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn populated_state() -> ConversationState {
        let mut state = ConversationState::new();
        state.add_conversation_entry(MessageRole::User, "Hello");
        state.mark_first_interaction_complete();
        state.add_conversation_entry(MessageRole::Assistant, "Pick a category");
        state.set_selected_category("data analysis");
        state.set_stage(WorkflowStage::Inquiry).unwrap();
        state.add_extracted_concepts(&[Concept::Business, Concept::Scale]);
        state.increment_conversation_depth();
        state.set_last_parsed_response(ParsedResponse {
            original_input: "Our \"Sales\" team".to_string(),
            identified_concepts: vec![Concept::Business],
            entities: vec!["Sales".to_string(), "Our".to_string()],
            complexity: Complexity::Low,
            word_count: 3,
        });
        state.update_requirements(BTreeMap::from([("rows".to_string(), json!(1_000_000))]));
        state.add_research_finding("source", json!(["warehouse", "crm"]));
        state.add_decision("Batch nightly", "Data lands once a day");
        state.add_question_record(QuestionRecord::new(
            QuestionKind::InitialCategory,
            "data analysis",
            "What type of data are you working with?",
        ));
        state
    }

    mod round_trip {
        use super::*;

        #[test]
        fn default_state_round_trips() {
            let state = ConversationState::new();
            let restored = ConversationState::decode(&state.export().unwrap()).unwrap();
            assert_eq!(restored, state);
        }

        #[test]
        fn populated_state_round_trips_field_for_field() {
            let state = populated_state();
            let mut restored = ConversationState::new();

            restored.import(&state.export().unwrap()).unwrap();

            assert_eq!(restored, state);
            assert_eq!(restored.created_at(), state.created_at());
            assert_eq!(restored.updated_at(), state.updated_at());
            assert_eq!(restored.selected_category(), Some("data analysis"));
            assert_eq!(restored.conversation_history().len(), 2);
        }

        #[test]
        fn export_uses_field_names_and_iso_timestamps() {
            let state = populated_state();
            let value: serde_json::Value = serde_json::from_str(&state.export().unwrap()).unwrap();

            assert_eq!(value["stage"], json!("inquiry"));
            assert_eq!(value["selected_category"], json!("data analysis"));
            assert_eq!(value["conversation_history"][0]["role"], json!("user"));
            let created = value["created_at"].as_str().unwrap();
            assert!(chrono::DateTime::parse_from_rfc3339(created).is_ok());
        }

        #[test]
        fn fractional_numbers_survive_round_trip() {
            let mut state = ConversationState::new();
            state.update_requirements(BTreeMap::from([
                ("latency_ms".to_string(), json!(971.9863718547629)),
                ("ratio".to_string(), json!(0.1 + 0.2)),
            ]));
            state.add_research_finding("tiny", json!([5e-324, 1.7976931348623157e308]));

            let restored = ConversationState::decode(&state.export().unwrap()).unwrap();

            assert_eq!(restored, state);
        }

        fn finite_f64() -> impl Strategy<Value = f64> {
            any::<f64>().prop_filter("finite", |f| f.is_finite())
        }

        fn concept() -> impl Strategy<Value = Concept> {
            proptest::sample::select(vec![
                Concept::Business,
                Concept::Technical,
                Concept::UserExperience,
                Concept::Automation,
                Concept::RealTime,
                Concept::Security,
                Concept::Scale,
            ])
        }

        fn question_kind() -> impl Strategy<Value = QuestionKind> {
            proptest::sample::select(vec![
                QuestionKind::InitialCategory,
                QuestionKind::Clarifying,
                QuestionKind::ConceptExploration,
                QuestionKind::DomainAware,
            ])
        }

        proptest! {
            #[test]
            fn arbitrary_histories_round_trip(
                messages in proptest::collection::vec(".{0,40}", 0..8),
                category in proptest::option::of("[a-z ]{1,20}"),
                depth in 0u32..20,
                requirements in proptest::collection::btree_map("[a-z_]{1,12}", finite_f64(), 0..6),
                findings in proptest::collection::vec(("[a-z_]{1,12}", proptest::collection::vec(finite_f64(), 0..4)), 0..4),
                decisions in proptest::collection::vec((".{0,20}", ".{0,20}"), 0..4),
                concepts in proptest::collection::vec(concept(), 0..8),
                questions in proptest::collection::vec((question_kind(), "[a-z ]{0,12}", ".{0,30}"), 0..5),
            ) {
                let mut state = ConversationState::new();
                for (i, message) in messages.iter().enumerate() {
                    let role = if i % 2 == 0 { MessageRole::User } else { MessageRole::Assistant };
                    state.add_conversation_entry(role, message.clone());
                }
                if let Some(category) = category {
                    state.set_selected_category(category);
                }
                for _ in 0..depth {
                    state.increment_conversation_depth();
                }
                state.update_requirements(
                    requirements.into_iter().map(|(key, value)| (key, json!(value))).collect(),
                );
                for (key, values) in findings {
                    state.add_research_finding(key, json!(values));
                }
                for (decision, reasoning) in decisions {
                    state.add_decision(decision, reasoning);
                }
                state.add_extracted_concepts(&concepts);
                for (kind, topic, question) in questions {
                    state.add_question_record(QuestionRecord::new(kind, topic, question));
                }

                let restored = ConversationState::decode(&state.export().unwrap()).unwrap();
                prop_assert_eq!(restored, state);
            }
        }
    }

    mod import_rules {
        use super::*;

        #[test]
        fn partial_document_keeps_defaults_for_missing_fields() {
            let mut state = ConversationState::new();

            state
                .import(r#"{"selected_category": "chatbot", "is_first_interaction": false}"#)
                .unwrap();

            assert_eq!(state.selected_category(), Some("chatbot"));
            assert!(!state.is_first_interaction());
            assert_eq!(state.stage(), WorkflowStage::Framing);
            assert!(state.conversation_history().is_empty());
        }

        #[test]
        fn malformed_json_is_rejected_and_state_untouched() {
            let mut state = populated_state();
            let before = state.clone();

            let err = state.import("{not json").unwrap_err();

            assert!(matches!(err, StateFormatError::Malformed(_)));
            assert_eq!(state, before);
        }

        #[test]
        fn non_object_document_is_rejected() {
            let mut state = ConversationState::new();
            let err = state.import("[1, 2, 3]").unwrap_err();
            assert!(matches!(err, StateFormatError::NotAnObject("an array")));
        }

        #[test]
        fn ill_typed_field_is_rejected_and_state_untouched() {
            let mut state = populated_state();
            let before = state.clone();

            let err = state.import(r#"{"stage": "review"}"#).unwrap_err();

            assert!(matches!(err, StateFormatError::Malformed(_)));
            assert_eq!(state, before);
        }
    }
}
