//! Socratic question engine.
//!
//! Generates the questions the dialogue asks: the opening question for a
//! category, concept or complexity driven follow-ups, and domain-aware
//! questions backed by the discovery engine. Every question it produces is
//! recorded in its question history.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::conversation::ConversationEntry;
use crate::domain::discovery::{
    ComponentRecommendation, DiscoveryError, DomainDiscoveryEngine, EnhancedDomainContext,
    ExpertiseLevel,
};
use crate::domain::foundation::SessionId;

use super::parser::parse_response;
use super::question_bank::{
    concept_questions, domain_questions, fallback_questions, initial_questions,
    UNKNOWN_CATEGORY_QUESTION,
};
use super::selector::{select_non_repetitive, DEFAULT_RECENT_WINDOW};
use super::values::{ParsedResponse, QuestionKind, QuestionRecord};

const BEGINNER_PROMPT: &str = "What's the main outcome you'd like this workflow to achieve?";
const ADVANCED_PROMPT: &str =
    "Which architectural constraints or integration boundaries should this workflow respect?";
const INTERMEDIATE_PROMPT: &str =
    "What systems or data sources will this workflow need to work with?";

/// A question produced by the domain-aware path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicQuestion {
    pub question: String,
    /// Domain the question was tailored to. `None` when the template path was used.
    pub domain: Option<String>,
    pub domain_aware: bool,
}

/// What the engine knows about a session's domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainInsights {
    pub domain: String,
    pub confidence: f64,
    pub expertise_level: ExpertiseLevel,
    pub compliance_frameworks: Vec<String>,
    pub technologies: Vec<String>,
    pub related_domains: Vec<String>,
    pub recommendations: Vec<ComponentRecommendation>,
}

/// Result of switching a session to a new domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSwitchOutcome {
    pub success: bool,
    pub previous_domain: Option<String>,
    pub new_domain: Option<String>,
    pub error: Option<String>,
}

/// Picks the domain-aware question for `context`.
///
/// The domain's question bank wins. Without one, the first known technology
/// is asked about, then the first concept, then a prompt matched to the
/// user's expertise.
pub fn domain_aware_question(
    context: &EnhancedDomainContext,
    history: &[ConversationEntry],
    window: usize,
) -> String {
    if let Some(questions) = domain_questions(context.domain()) {
        return select_non_repetitive(questions, history, window).to_string();
    }
    if let Some(technology) = context.knowledge.technologies.first() {
        return format!("How do you plan to use {} in this workflow?", technology);
    }
    if let Some(concept) = context.knowledge.concepts.first() {
        return format!("How does {} shape what this workflow needs to do?", concept);
    }
    match context.expertise_level {
        ExpertiseLevel::Beginner => BEGINNER_PROMPT,
        ExpertiseLevel::Advanced => ADVANCED_PROMPT,
        ExpertiseLevel::Intermediate => INTERMEDIATE_PROMPT,
    }
    .to_string()
}

/// Question generator for one dialogue.
pub struct SocraticEngine {
    discovery: Arc<DomainDiscoveryEngine>,
    recent_window: usize,
    question_history: Vec<QuestionRecord>,
    /// Mirrors the discovery engine's active contexts; may lag behind it.
    domain_cache: HashMap<SessionId, EnhancedDomainContext>,
}

impl SocraticEngine {
    pub fn new(discovery: Arc<DomainDiscoveryEngine>) -> Self {
        Self {
            discovery,
            recent_window: DEFAULT_RECENT_WINDOW,
            question_history: Vec::new(),
            domain_cache: HashMap::new(),
        }
    }

    /// Sets how many trailing history entries are checked for repeats.
    pub fn with_recent_window(mut self, window: usize) -> Self {
        self.recent_window = window;
        self
    }

    pub fn recent_window(&self) -> usize {
        self.recent_window
    }

    pub fn question_history(&self) -> &[QuestionRecord] {
        &self.question_history
    }

    /// Clears the question history and the cached domain contexts.
    ///
    /// The discovery engine's active contexts are left alone.
    pub fn reset(&mut self) {
        self.question_history.clear();
        self.domain_cache.clear();
    }

    /// Opening question for a category.
    ///
    /// Unknown categories get a generic prompt that is not recorded.
    pub fn generate_initial_question(&mut self, category: &str) -> String {
        let Some(question) = initial_questions(category).and_then(|qs| qs.first()) else {
            return UNKNOWN_CATEGORY_QUESTION.to_string();
        };
        self.record(QuestionKind::InitialCategory, category, question)
    }

    /// Parses a user answer.
    pub fn parse_response(&self, input: &str) -> ParsedResponse {
        parse_response(input)
    }

    /// Follow-up on the first identified concept, or a complexity fallback.
    pub fn generate_clarifying_question(
        &mut self,
        parsed: &ParsedResponse,
        history: &[ConversationEntry],
        category: &str,
    ) -> String {
        if let Some(concept) = parsed.primary_concept() {
            let questions = concept_questions(concept);
            if !questions.is_empty() {
                let question = select_non_repetitive(questions, history, self.recent_window);
                return self.record(QuestionKind::ConceptExploration, concept.as_str(), question);
            }
        }

        let questions = fallback_questions(parsed.complexity);
        let question = select_non_repetitive(questions, history, self.recent_window);
        self.record(QuestionKind::Clarifying, category, question)
    }

    /// Domain-aware question for `text`, falling back to the template path.
    pub async fn generate_dynamic_question(
        &mut self,
        text: &str,
        session_id: &SessionId,
        history: &[ConversationEntry],
        category: &str,
    ) -> DynamicQuestion {
        match self.resolve_context(text, session_id).await {
            Ok(context) => {
                let question = domain_aware_question(&context, history, self.recent_window);
                let question = self.record(QuestionKind::DomainAware, context.domain(), &question);
                DynamicQuestion {
                    question,
                    domain: Some(context.domain().to_string()),
                    domain_aware: true,
                }
            }
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "Domain-aware question failed, using templates");
                let parsed = parse_response(text);
                DynamicQuestion {
                    question: self.generate_clarifying_question(&parsed, history, category),
                    domain: None,
                    domain_aware: false,
                }
            }
        }
    }

    /// Cache first, then the discovery engine's active context, then a fresh activation.
    async fn resolve_context(
        &mut self,
        text: &str,
        session_id: &SessionId,
    ) -> Result<EnhancedDomainContext, DiscoveryError> {
        if let Some(context) = self.domain_cache.get(session_id) {
            debug!(session_id = %session_id, "Using cached domain context");
            return Ok(context.clone());
        }

        let context = match self.discovery.get_active_domain_context(session_id).await {
            Some(context) => context,
            None => {
                let result = self.discovery.activate_domain_expertise(text, session_id).await;
                if !result.success {
                    return Err(DiscoveryError::ActivationFailure(
                        result.error.unwrap_or_default(),
                    ));
                }
                result.domain_context
            }
        };

        self.domain_cache.insert(session_id.clone(), context.clone());
        Ok(context)
    }

    /// Summary of the session's domain, if one is known.
    pub async fn get_domain_insights(&self, session_id: &SessionId) -> Option<DomainInsights> {
        let context = match self.domain_cache.get(session_id) {
            Some(context) => context.clone(),
            None => self.discovery.get_active_domain_context(session_id).await?,
        };
        let recommendations = self.discovery.generate_component_recommendations(&context).await;

        Some(DomainInsights {
            domain: context.domain().to_string(),
            confidence: context.confidence(),
            expertise_level: context.expertise_level,
            compliance_frameworks: context.compliance_frameworks,
            technologies: context.knowledge.technologies,
            related_domains: context.related_domains,
            recommendations,
        })
    }

    /// Switches the session's domain and refreshes the cached context.
    pub async fn switch_domain_context(&mut self, text: &str, session_id: &SessionId) -> DomainSwitchOutcome {
        let previous_domain = match self.domain_cache.get(session_id) {
            Some(context) => Some(context.domain().to_string()),
            None => self
                .discovery
                .get_active_domain_context(session_id)
                .await
                .map(|context| context.domain().to_string()),
        };

        let result = self.discovery.switch_domain(session_id, text).await;
        if !result.success {
            return DomainSwitchOutcome {
                success: false,
                previous_domain,
                new_domain: None,
                error: result.error,
            };
        }

        let new_domain = result.domain_context.domain().to_string();
        self.domain_cache.insert(session_id.clone(), result.domain_context);
        DomainSwitchOutcome {
            success: true,
            previous_domain,
            new_domain: Some(new_domain),
            error: None,
        }
    }

    fn record(&mut self, kind: QuestionKind, topic: &str, question: &str) -> String {
        self.question_history
            .push(QuestionRecord::new(kind, topic, question));
        question.to_string()
    }
}
