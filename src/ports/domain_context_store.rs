//! Domain Context Store Port - Interface for active per-session contexts.
//!
//! The discovery engine keeps the most recent enhanced context for each
//! session here. Activation overwrites, so a session never has more than
//! one active context.

use async_trait::async_trait;

use crate::domain::discovery::EnhancedDomainContext;
use crate::domain::foundation::SessionId;

use super::StoreError;

/// Port for storing the active domain context of each session
#[async_trait]
pub trait DomainContextStore: Send + Sync {
    /// Load the active context for a session
    ///
    /// # Returns
    /// `None` if the session has never been activated
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read
    async fn get(&self, session_id: &SessionId) -> Result<Option<EnhancedDomainContext>, StoreError>;

    /// Save the active context for a session, replacing any previous one
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be written
    async fn put(
        &self,
        session_id: &SessionId,
        context: &EnhancedDomainContext,
    ) -> Result<(), StoreError>;

    /// Remove the active context for a session
    ///
    /// Removing a session that has no context is not an error.
    async fn remove(&self, session_id: &SessionId) -> Result<(), StoreError>;
}
