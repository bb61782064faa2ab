//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (session ids, validation errors, state machine trait)
//! - `conversation` - Dialogue stage, session state record, export and import
//! - `socratic` - Question banks, answer parsing and the Socratic question engine
//! - `discovery` - Domain detection, knowledge, enrichment and component recommendations

pub mod conversation;
pub mod discovery;
pub mod foundation;
pub mod socratic;
