//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `generation_service.rs`).

pub mod feedback_service_impl;
pub mod generation_service_impl;

pub use feedback_service_impl::FeedbackServiceImpl;
pub use generation_service_impl::{GenerationServiceImpl, GenerationSettings};
