//! Socratic Architect - Guided workflow design through questioning
//!
//! This crate drives a stage-based dialogue that elicits what a user wants
//! to build, while inferring their professional domain from free text to
//! tailor questions and recommend workflow components.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
