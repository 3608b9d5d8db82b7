//! # Relay Core
//!
//! Core types, ports, and error definitions for Prompt Relay.
//! Every other crate in the workspace depends on this one; it holds no
//! infrastructure code of its own beyond the tracing bootstrap.

pub mod domain;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use telemetry::{LogFormat, TelemetryConfig};
pub use traits::*;
