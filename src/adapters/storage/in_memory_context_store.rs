//! In-Memory Domain Context Store Adapter
//!
//! Stores the active enhanced context of each session in memory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::discovery::EnhancedDomainContext;
use crate::domain::foundation::SessionId;
use crate::ports::{DomainContextStore, StoreError};

/// In-memory storage for active domain contexts
#[derive(Debug, Clone)]
pub struct InMemoryDomainContextStore {
    contexts: Arc<RwLock<HashMap<SessionId, EnhancedDomainContext>>>,
}

impl InMemoryDomainContextStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored contexts (useful for tests)
    pub async fn clear(&self) {
        self.contexts.write().await.clear();
    }

    /// Get the number of sessions with an active context
    pub async fn len(&self) -> usize {
        self.contexts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contexts.read().await.is_empty()
    }
}

impl Default for InMemoryDomainContextStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DomainContextStore for InMemoryDomainContextStore {
    async fn get(&self, session_id: &SessionId) -> Result<Option<EnhancedDomainContext>, StoreError> {
        let contexts = self.contexts.read().await;
        Ok(contexts.get(session_id).cloned())
    }

    async fn put(
        &self,
        session_id: &SessionId,
        context: &EnhancedDomainContext,
    ) -> Result<(), StoreError> {
        let mut contexts = self.contexts.write().await;
        contexts.insert(session_id.clone(), context.clone());
        Ok(())
    }

    async fn remove(&self, session_id: &SessionId) -> Result<(), StoreError> {
        self.contexts.write().await.remove(session_id);
        Ok(())
    }
}
