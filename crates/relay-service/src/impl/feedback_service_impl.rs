//! Feedback service implementation.

use crate::dto::FeedbackRequest;
use crate::feedback_service::FeedbackService;
use async_trait::async_trait;
use relay_core::{Feedback, NewFeedback, RelayResult};
use relay_repository::FeedbackRepository;
use std::sync::Arc;
use tracing::info;

/// Feedback service writing straight through to the repository.
pub struct FeedbackServiceImpl {
    repository: Arc<dyn FeedbackRepository>,
}

impl FeedbackServiceImpl {
    /// Creates a new feedback service.
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FeedbackService for FeedbackServiceImpl {
    async fn submit(&self, request: FeedbackRequest) -> RelayResult<Feedback> {
        let feedback = NewFeedback::from(request);
        let stored = self.repository.insert(&feedback).await?;

        info!(id = stored.id, score = stored.score, "Feedback stored");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use relay_core::RelayError;
    use std::sync::Mutex;

    /// Mock feedback repository for testing.
    struct MockFeedbackRepository {
        rows: Mutex<Vec<NewFeedback>>,
        fail: bool,
    }

    impl MockFeedbackRepository {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                fail: false,
            }
        }
    }

    #[async_trait]
    impl FeedbackRepository for MockFeedbackRepository {
        async fn insert(&self, feedback: &NewFeedback) -> RelayResult<Feedback> {
            if self.fail {
                return Err(RelayError::Database("relation \"feedback\" does not exist".to_string()));
            }
            let mut rows = self.rows.lock().unwrap();
            rows.push(feedback.clone());
            Ok(Feedback {
                id: rows.len() as i64,
                score: feedback.score,
                content: feedback.content.clone(),
                created_at: Utc::now(),
            })
        }

        async fn count(&self) -> RelayResult<u64> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }
    }

    #[tokio::test]
    async fn test_submit_inserts_one_row() {
        let repo = Arc::new(MockFeedbackRepository::new());
        let service = FeedbackServiceImpl::new(repo.clone());

        let stored = service
            .submit(FeedbackRequest {
                score: 5,
                content: "Great".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(stored.score, 5);
        assert_eq!(stored.content, "Great");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicates_are_appended() {
        let repo = Arc::new(MockFeedbackRepository::new());
        let service = FeedbackServiceImpl::new(repo.clone());
        let request = FeedbackRequest {
            score: 1,
            content: "meh".to_string(),
        };

        service.submit(request.clone()).await.unwrap();
        service.submit(request).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let repo = Arc::new(MockFeedbackRepository {
            rows: Mutex::new(Vec::new()),
            fail: true,
        });
        let service = FeedbackServiceImpl::new(repo);

        let err = service
            .submit(FeedbackRequest {
                score: 5,
                content: "Great".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_persistence());
    }
}
