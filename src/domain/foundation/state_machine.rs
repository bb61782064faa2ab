//! State machine trait for status enums.
//!
//! Gives stage-like enums one validated way to move between states.

use super::ValidationError;

/// Trait for enums whose values form a state machine.
///
/// Implementors list their legal moves; `transition_to` validates a move
/// against them and reports an illegal one as a [`ValidationError`].
///
/// ```ignore
/// let next = WorkflowStage::Framing.transition_to(WorkflowStage::Inquiry)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is legal.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every state reachable in one move from self.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Validates and performs a transition.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(
                format!("{:?}", self),
                format!("{:?}", target),
            ))
        }
    }

    /// True when no further transitions exist.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
