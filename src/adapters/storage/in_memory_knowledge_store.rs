//! In-Memory Knowledge Store Adapter
//!
//! Caches domain knowledge in memory, keyed by domain name.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::discovery::DomainKnowledge;
use crate::ports::{KnowledgeStore, StoreError};

/// In-memory cache of domain knowledge
#[derive(Debug, Clone)]
pub struct InMemoryKnowledgeStore {
    entries: Arc<RwLock<HashMap<String, DomainKnowledge>>>,
}

impl InMemoryKnowledgeStore {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all cached knowledge (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Get the number of cached domains
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryKnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeStore for InMemoryKnowledgeStore {
    async fn get(&self, domain: &str) -> Result<Option<DomainKnowledge>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(domain).cloned())
    }

    async fn put(&self, knowledge: &DomainKnowledge) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(knowledge.domain.clone(), knowledge.clone());
        Ok(())
    }
}
