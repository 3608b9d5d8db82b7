//! Integration tests for PgFeedbackRepository.
//!
//! These tests run against a real Postgres database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use relay_core::{HealthCheck, NewFeedback};
use relay_repository::{FeedbackRepository, PgFeedbackRepository};

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.pool());

    let stored = repo
        .insert(&NewFeedback::new(5, "Great"))
        .await
        .expect("Failed to insert feedback");

    assert!(stored.id > 0);
    assert_eq!(stored.score, 5);
    assert_eq!(stored.content, "Great");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_identical_submissions_create_two_rows() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.pool());

    let first = repo.insert(&NewFeedback::new(5, "Great")).await.unwrap();
    let second = repo.insert(&NewFeedback::new(5, "Great")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_values_stored_verbatim() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.pool());

    let stored = repo
        .insert(&NewFeedback::new(-42, "  Не очень 🙁 '; DROP TABLE feedback; --"))
        .await
        .unwrap();

    assert_eq!(stored.score, -42);
    assert_eq!(stored.content, "  Не очень 🙁 '; DROP TABLE feedback; --");

    let empty = repo.insert(&NewFeedback::new(i64::MAX, "")).await.unwrap();
    assert_eq!(empty.score, i64::MAX);
    assert_eq!(empty.content, "");
}

#[tokio::test]
async fn test_pool_health_check() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    assert_eq!(pool.name(), "database");
    pool.check().await.expect("health check failed");
}

#[tokio::test]
async fn test_closed_pool_reports_database_error() {
    let db = TestDatabase::new().await;
    let pool = db.pool();
    let repo = PgFeedbackRepository::new(pool.clone());

    pool.close().await;

    let err = repo.insert(&NewFeedback::new(1, "late")).await.unwrap_err();
    assert!(err.is_persistence());
    assert!(pool.check().await.is_err());
}
