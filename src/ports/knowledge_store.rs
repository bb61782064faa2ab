//! Knowledge Store Port - Interface for the domain knowledge cache.
//!
//! Entries are keyed by domain name. Freshness is decided by the caller
//! from `DomainKnowledge::last_updated`; the store never expires entries.

use async_trait::async_trait;

use crate::domain::discovery::DomainKnowledge;

use super::StoreError;

/// Port for caching domain knowledge
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Load cached knowledge for a domain
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read
    async fn get(&self, domain: &str) -> Result<Option<DomainKnowledge>, StoreError>;

    /// Cache knowledge under its own `domain`, replacing any previous entry
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be written
    async fn put(&self, knowledge: &DomainKnowledge) -> Result<(), StoreError>;
}
