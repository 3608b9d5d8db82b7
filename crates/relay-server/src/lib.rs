//! # Relay Server Library
//!
//! Wiring and lifecycle for the Prompt Relay server: building the component
//! graph from configuration, serving HTTP, and shutting down cleanly.

pub mod app;
pub mod di;
pub mod startup;
