//! Domain types.

pub mod feedback;

pub use feedback::*;
