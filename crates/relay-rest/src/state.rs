//! Application state for Axum handlers.

use relay_core::HealthCheck;
use relay_service::{FeedbackService, GenerationService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<dyn GenerationService>,
    pub feedback_service: Arc<dyn FeedbackService>,
    /// Dependencies probed by `/ready`.
    pub health_checks: Arc<[Arc<dyn HealthCheck>]>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        generation_service: Arc<dyn GenerationService>,
        feedback_service: Arc<dyn FeedbackService>,
        health_checks: Vec<Arc<dyn HealthCheck>>,
    ) -> Self {
        Self {
            generation_service,
            feedback_service,
            health_checks: health_checks.into(),
        }
    }
}
