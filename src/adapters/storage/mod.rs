//! Storage Adapters
//!
//! Implementations of the store ports used by domain discovery.
//!
//! ## Available Adapters
//!
//! - **InMemoryDomainContextStore** - Active contexts per session
//! - **InMemoryKnowledgeStore** - Domain knowledge cache
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use adapters::storage::{InMemoryDomainContextStore, InMemoryKnowledgeStore};
//!
//! let contexts = Arc::new(InMemoryDomainContextStore::new());
//! let knowledge = Arc::new(InMemoryKnowledgeStore::new());
//! ```

mod in_memory_context_store;
mod in_memory_knowledge_store;

pub use in_memory_context_store::InMemoryDomainContextStore;
pub use in_memory_knowledge_store::InMemoryKnowledgeStore;
