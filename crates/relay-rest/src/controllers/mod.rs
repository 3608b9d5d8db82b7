//! REST API controllers.

pub mod feedback_controller;
pub mod generation_controller;
pub mod health_controller;

pub use health_controller::*;
