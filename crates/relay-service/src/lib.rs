//! # Relay Service
//!
//! Business logic for Prompt Relay: the cached generation pipeline and
//! feedback intake.

pub mod cache;
pub mod dto;
pub mod feedback_service;
pub mod generation_service;
pub mod r#impl;

pub use cache::*;
pub use dto::*;
pub use feedback_service::*;
pub use generation_service::*;
pub use r#impl::{FeedbackServiceImpl, GenerationServiceImpl, GenerationSettings};
