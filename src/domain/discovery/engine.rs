//! Domain Discovery Engine.
//!
//! Orchestrates the discovery pipeline for a session:
//!
//! ```text
//! text -> indicators -> classification -> knowledge -> enrichment -> recommendations
//! ```
//!
//! Active contexts and the knowledge cache live behind injected store ports.
//! Every public operation recovers from internal failures with a documented
//! fallback instead of returning an error.

use chrono::{Duration, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::foundation::SessionId;
use crate::ports::{DomainContextStore, KnowledgeStore};

use super::classifier::classify_with_enhancement;
use super::enricher::enrich;
use super::errors::DiscoveryError;
use super::indicators::extract_indicators;
use super::knowledge::{build_knowledge, knowledge_key};
use super::recommender::{recommend, DEFAULT_MAX_RECOMMENDATIONS};
use super::values::{
    ComponentRecommendation, DomainActivationResult, DomainContext, DomainKnowledge,
    EnhancedDomainContext,
};

/// Process-wide activation counter, used to keep persistence keys unique.
static ACTIVATION_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Metadata key recording the domain a session switched away from.
pub const PREVIOUS_DOMAIN_KEY: &str = "previous_domain";
/// Metadata key recording when a switch happened (RFC 3339).
pub const DOMAIN_SWITCH_TIME_KEY: &str = "domain_switch_time";

/// Tunables for the discovery engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverySettings {
    /// Cached knowledge older than this is rebuilt.
    pub knowledge_ttl: Duration,
    /// Contexts above this confidence are marked for persistence.
    pub persistence_confidence_threshold: f64,
    pub max_recommendations: usize,
    /// Longer inputs are rejected by the classifier.
    pub max_input_length: usize,
    /// Source labels added to built knowledge after `conversation`.
    pub knowledge_sources: Vec<String>,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            knowledge_ttl: Duration::hours(24),
            persistence_confidence_threshold: 0.6,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
            max_input_length: 100_000,
            knowledge_sources: Vec::new(),
        }
    }
}

/// Detects a user's professional domain and activates matching expertise.
pub struct DomainDiscoveryEngine {
    contexts: Arc<dyn DomainContextStore>,
    knowledge: Arc<dyn KnowledgeStore>,
    settings: DiscoverySettings,
    session_locks: Mutex<HashMap<SessionId, Arc<Mutex<()>>>>,
}

impl DomainDiscoveryEngine {
    pub fn new(
        contexts: Arc<dyn DomainContextStore>,
        knowledge: Arc<dyn KnowledgeStore>,
        settings: DiscoverySettings,
    ) -> Self {
        Self {
            contexts,
            knowledge,
            settings,
            session_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> &DiscoverySettings {
        &self.settings
    }

    /// Classifies `text`. Never fails.
    ///
    /// Any classification failure yields the `general` fallback context
    /// with the failure recorded under `metadata.error`.
    pub async fn analyze_user_context(
        &self,
        text: &str,
        session_id: Option<&SessionId>,
    ) -> DomainContext {
        match self.try_analyze(text, session_id) {
            Ok(context) => {
                if let Some(session_id) = session_id {
                    if context.confidence > self.settings.persistence_confidence_threshold {
                        info!(
                            session_id = %session_id,
                            domain = %context.domain,
                            confidence = context.confidence,
                            "Persisting domain context"
                        );
                    }
                }
                context
            }
            Err(e) => {
                error!(error = %e, "Error analyzing user context");
                DomainContext::fallback().with_metadata("error", json!(e.to_string()))
            }
        }
    }

    fn try_analyze(
        &self,
        text: &str,
        session_id: Option<&SessionId>,
    ) -> Result<DomainContext, DiscoveryError> {
        let input_length = text.chars().count();
        if input_length > self.settings.max_input_length {
            return Err(DiscoveryError::ClassificationFailure(format!(
                "input of {} characters exceeds limit of {}",
                input_length, self.settings.max_input_length
            )));
        }

        let indicators = extract_indicators(text);
        let classification = classify_with_enhancement(&indicators);
        debug!(
            domain = classification.domain,
            confidence = classification.confidence,
            indicator_count = indicators.len(),
            "Classified input"
        );

        let indicator_count = indicators.len();
        Ok(
            DomainContext::new(classification.domain, classification.confidence, indicators)
                .with_metadata("session_id", json!(session_id.map(SessionId::as_str)))
                .with_metadata("input_length", json!(input_length))
                .with_metadata("indicator_count", json!(indicator_count)),
        )
    }

    /// Returns knowledge for `hints`, reusing cached knowledge while fresh.
    ///
    /// Store failures are logged and the freshly built knowledge is returned.
    pub async fn query_domain_knowledge(&self, hints: &[String]) -> DomainKnowledge {
        let key = knowledge_key(hints);

        match self.knowledge.get(key).await {
            Ok(Some(cached)) if cached.is_fresh_at(Utc::now(), self.settings.knowledge_ttl) => {
                debug!(domain = %key, "Using cached domain knowledge");
                return cached;
            }
            Ok(_) => {}
            Err(e) => warn!(domain = %key, error = %e, "Failed to read cached domain knowledge"),
        }

        let knowledge = build_knowledge(hints, &self.settings.knowledge_sources);
        if let Err(e) = self.knowledge.put(&knowledge).await {
            warn!(domain = %key, error = %e, "Failed to query domain knowledge");
        }
        knowledge
    }

    /// Adds knowledge, related domains, expertise and compliance to `context`.
    pub async fn enhance_with_context_analysis(&self, context: DomainContext) -> EnhancedDomainContext {
        let knowledge = self.query_domain_knowledge(&[context.domain.clone()]).await;
        enrich(context, knowledge)
    }

    /// Ranked components for `context`; empty if any candidate is invalid.
    pub async fn generate_component_recommendations(
        &self,
        context: &EnhancedDomainContext,
    ) -> Vec<ComponentRecommendation> {
        match recommend(context, self.settings.max_recommendations) {
            Ok(recommendations) => recommendations,
            Err(e) => {
                error!(domain = %context.domain(), error = %e, "Error generating component recommendations");
                Vec::new()
            }
        }
    }

    /// Runs the full pipeline and stores the result as the session's active context.
    ///
    /// Repeated calls overwrite. A store failure yields `success = false`
    /// with the fallback context.
    pub async fn activate_domain_expertise(
        &self,
        text: &str,
        session_id: &SessionId,
    ) -> DomainActivationResult {
        let lock = self.session_lock(session_id).await;
        let _guard = lock.lock().await;
        self.activate_locked(text, session_id).await
    }

    async fn activate_locked(&self, text: &str, session_id: &SessionId) -> DomainActivationResult {
        match self.try_activate(text, session_id).await {
            Ok(result) => result,
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Error activating domain expertise");
                DomainActivationResult::failed(e.to_string())
            }
        }
    }

    async fn try_activate(
        &self,
        text: &str,
        session_id: &SessionId,
    ) -> Result<DomainActivationResult, DiscoveryError> {
        let context = self.analyze_user_context(text, Some(session_id)).await;
        let enhanced = self.enhance_with_context_analysis(context).await;
        let recommendations = self.generate_component_recommendations(&enhanced).await;

        self.contexts.put(session_id, &enhanced).await?;

        let persistence_key = format!(
            "{}-{}-{}-{}",
            session_id,
            enhanced.domain(),
            Utc::now().timestamp(),
            ACTIVATION_SEQUENCE.fetch_add(1, Ordering::Relaxed)
        );
        info!(
            session_id = %session_id,
            domain = %enhanced.domain(),
            recommendations = recommendations.len(),
            "Activated domain expertise"
        );

        Ok(DomainActivationResult {
            success: true,
            domain_context: enhanced,
            recommendations,
            persistence_key,
            error: None,
        })
    }

    /// The session's active context, if any. A read failure is treated as none.
    pub async fn get_active_domain_context(&self, session_id: &SessionId) -> Option<EnhancedDomainContext> {
        match self.contexts.get(session_id).await {
            Ok(context) => context,
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "Failed to read active domain context");
                None
            }
        }
    }

    /// Drops the session's active context. A store failure is logged.
    pub async fn deactivate_domain_expertise(&self, session_id: &SessionId) {
        let lock = self.session_lock(session_id).await;
        let _guard = lock.lock().await;

        match self.contexts.remove(session_id).await {
            Ok(()) => debug!(session_id = %session_id, "Deactivated domain expertise"),
            Err(e) => warn!(session_id = %session_id, error = %e, "Failed to remove active domain context"),
        }
    }

    /// Re-activates a session from new text, recording the previous domain.
    ///
    /// When the session had an active context and activation succeeds, the
    /// new context carries `previous_domain` and `domain_switch_time` in its
    /// metadata, both in the result and in the store.
    pub async fn switch_domain(&self, session_id: &SessionId, text: &str) -> DomainActivationResult {
        let lock = self.session_lock(session_id).await;
        let _guard = lock.lock().await;

        let previous = self.get_active_domain_context(session_id).await;
        let mut result = self.activate_locked(text, session_id).await;

        if let (true, Some(previous)) = (result.success, previous) {
            let metadata = &mut result.domain_context.context.metadata;
            metadata.insert(PREVIOUS_DOMAIN_KEY.to_string(), json!(previous.domain()));
            metadata.insert(DOMAIN_SWITCH_TIME_KEY.to_string(), json!(Utc::now().to_rfc3339()));

            if let Err(e) = self.contexts.put(session_id, &result.domain_context).await {
                warn!(session_id = %session_id, error = %e, "Failed to store switched domain context");
            }
            info!(
                session_id = %session_id,
                from = %previous.domain(),
                to = %result.domain_context.domain(),
                "Switched domain"
            );
        }

        result
    }

    async fn session_lock(&self, session_id: &SessionId) -> Arc<Mutex<()>> {
        let mut locks = self.session_locks.lock().await;
        locks
            .entry(session_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
