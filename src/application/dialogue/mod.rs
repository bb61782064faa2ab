//! Dialogue use case - one session's guided conversation.

mod controller;
mod response;

pub use controller::{parse_category_selection, DialogueController, DialogueSettings};
pub use response::DialogueResponse;
