//! Data Transfer Objects for the HTTP API.

mod feedback_dto;
mod generation_dto;

pub use feedback_dto::*;
pub use generation_dto::*;
