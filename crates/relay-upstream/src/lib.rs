//! # Relay Upstream
//!
//! HTTP client for the chat-completion API that produces generated text.
//! One prompt becomes one single-turn request; there are no retries and no
//! caching at this layer.

mod client;
mod error;
mod wire;

pub use client::*;
pub use error::*;
pub use wire::*;
