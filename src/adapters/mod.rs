//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - In-memory store implementations

pub mod storage;

pub use storage::{InMemoryDomainContextStore, InMemoryKnowledgeStore};
