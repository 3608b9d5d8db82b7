//! # Relay Repository
//!
//! Postgres access for the feedback table.
//!
//! ```text
//! FeedbackService
//!   ↓  Arc<dyn FeedbackRepository>
//! PgFeedbackRepository
//!   ↓  Arc<DatabasePool>
//! Postgres
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
