//! Conversation domain module.
//!
//! Tracks one dialogue session: its stage, message history, extracted
//! concepts and requirements. Handles export and import of the full record.

mod snapshot;
mod stage;
mod state;

pub use snapshot::StateFormatError;
pub use stage::WorkflowStage;
pub use state::{ConversationEntry, ConversationState, DecisionEntry, MessageRole};
