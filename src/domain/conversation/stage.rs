//! Dialogue stages.
//!
//! A session starts in `Framing`, where the user picks a workflow category,
//! then moves to `Inquiry` for clarifying questions. `Research` and
//! `Generation` are reserved for later phases of the product.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The named phase of the guided dialogue.
///
/// Stages only move forward. The one way back to `Framing` is a full reset
/// of the conversation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Category selection.
    #[default]
    Framing,

    /// Iterative clarifying questions.
    Inquiry,

    /// Not yet implemented; inputs get a placeholder reply.
    Research,

    /// Not yet implemented; inputs get a placeholder reply.
    Generation,
}

impl WorkflowStage {
    /// All stages in dialogue order.
    pub const ALL: [WorkflowStage; 4] = [
        WorkflowStage::Framing,
        WorkflowStage::Inquiry,
        WorkflowStage::Research,
        WorkflowStage::Generation,
    ];

    /// Wire name of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Framing => "framing",
            Self::Inquiry => "inquiry",
            Self::Research => "research",
            Self::Generation => "generation",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for WorkflowStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        // Forward only; skipping ahead is allowed.
        target > self
    }

    fn valid_transitions(&self) -> Vec<Self> {
        Self::ALL.iter().copied().filter(|s| s > self).collect()
    }
}
