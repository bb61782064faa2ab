//! Errors shared by the store ports.

/// Errors that can occur while reading or writing a store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),
}
