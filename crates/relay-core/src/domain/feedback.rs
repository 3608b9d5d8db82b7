//! Feedback entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feedback as submitted by a user, before it is stored.
///
/// Score and content are kept verbatim; no range or length checks apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub score: i64,
    pub content: String,
}

impl NewFeedback {
    /// Creates a new feedback record.
    #[must_use]
    pub fn new(score: i64, content: impl Into<String>) -> Self {
        Self {
            score,
            content: content.into(),
        }
    }
}

/// A stored feedback row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Database-assigned identifier.
    pub id: i64,
    pub score: i64,
    pub content: String,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
}
