//! # Relay REST
//!
//! HTTP surface of Prompt Relay: `POST /generate`, `POST /feedback`, health
//! probes, and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
