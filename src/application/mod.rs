//! Application layer - Use cases over the domain.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The dialogue controller is the single inbound entry point for a session.

pub mod dialogue;

pub use dialogue::{DialogueController, DialogueResponse, DialogueSettings};
