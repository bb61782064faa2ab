//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `DomainContextStore` - Active domain context per session
//! - `KnowledgeStore` - Domain knowledge cache keyed by domain name

mod domain_context_store;
mod knowledge_store;
mod store_error;

pub use domain_context_store::DomainContextStore;
pub use knowledge_store::KnowledgeStore;
pub use store_error::StoreError;
