//! End-to-end tests of the HTTP surface.
//!
//! The upstream API is a wiremock server; the cache is the in-memory backend
//! and feedback goes to an in-memory repository.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use relay_config::{ServerConfig, UpstreamConfig};
use relay_core::{Feedback, HealthCheck, NewFeedback, RelayError, RelayResult};
use relay_repository::FeedbackRepository;
use relay_rest::{create_router, AppState};
use relay_service::{
    mock_content, FeedbackServiceImpl, GenerationServiceImpl, GenerationSettings,
    MemoryCacheService,
};
use relay_upstream::ChatCompletionClient;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATION_FAILED: &str = "Content generation failed. Please try again later.";

/// In-memory feedback repository.
#[derive(Default)]
struct InMemoryFeedbackRepository {
    rows: Mutex<Vec<Feedback>>,
    fail: bool,
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn insert(&self, feedback: &NewFeedback) -> RelayResult<Feedback> {
        if self.fail {
            return Err(RelayError::Database("password authentication failed".to_string()));
        }
        let mut rows = self.rows.lock().unwrap();
        let stored = Feedback {
            id: rows.len() as i64 + 1,
            score: feedback.score,
            content: feedback.content.clone(),
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> RelayResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

/// Health check with a fixed answer.
struct StaticCheck {
    name: &'static str,
    healthy: bool,
}

#[async_trait]
impl HealthCheck for StaticCheck {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn check(&self) -> RelayResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(RelayError::Cache("Connection refused (os error 111)".to_string()))
        }
    }
}

struct TestApp {
    router: Router,
    feedback: Arc<InMemoryFeedbackRepository>,
}

fn build_app(
    upstream: &MockServer,
    mock_mode: bool,
    feedback: InMemoryFeedbackRepository,
    checks: Vec<Arc<dyn HealthCheck>>,
) -> TestApp {
    let client = ChatCompletionClient::new(&UpstreamConfig {
        base_url: upstream.uri(),
        api_key: "sk-test".to_string(),
        timeout_secs: 5,
        ..UpstreamConfig::default()
    })
    .unwrap();

    let settings = GenerationSettings {
        ttl: Duration::from_secs(60),
        mock_ttl: Duration::from_secs(60),
        key_prefix: "test:".to_string(),
        mock_mode,
    };
    let generation = GenerationServiceImpl::new(
        Arc::new(MemoryCacheService::new()),
        Arc::new(client),
        settings,
    );

    let feedback = Arc::new(feedback);
    let state = AppState::new(
        Arc::new(generation),
        Arc::new(FeedbackServiceImpl::new(feedback.clone())),
        checks,
    );

    TestApp {
        router: create_router(state, &ServerConfig::default()),
        feedback,
    }
}

fn default_app(upstream: &MockServer) -> TestApp {
    build_app(upstream, false, InMemoryFeedbackRepository::default(), Vec::new())
}

async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn completion(content: &str) -> Value {
    json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
}

#[tokio::test]
async fn test_generate_calls_upstream_once_then_serves_cache() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("A short poem")))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = default_app(&upstream);

    let first = post_json(&app.router, "/generate", r#"{"prompt":"Write a poem"}"#).await;
    let second = post_json(&app.router, "/generate", r#"{"prompt":"Write a poem"}"#).await;

    assert_eq!(first, (StatusCode::OK, json!({ "content": "A short poem" })));
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_generate_distinct_prompts_each_call_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("text")))
        .expect(2)
        .mount(&upstream)
        .await;
    let app = default_app(&upstream);

    post_json(&app.router, "/generate", r#"{"prompt":"One"}"#).await;
    post_json(&app.router, "/generate", r#"{"prompt":"one"}"#).await;
}

#[tokio::test]
async fn test_generate_invalid_prompt() {
    let upstream = MockServer::start().await;
    let app = default_app(&upstream);

    for body in ["{}", "not json", r#"{"prompt": 7}"#] {
        let (status, json) = post_json(&app.router, "/generate", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json, json!({ "error": "Invalid prompt" }));
    }
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_accepts_empty_prompt() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("anything")))
        .mount(&upstream)
        .await;
    let app = default_app(&upstream);

    let (status, _) = post_json(&app.router, "/generate", r#"{"prompt":""}"#).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_upstream_error_detail_is_not_leaked() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("rate limited"))
        .mount(&upstream)
        .await;
    let app = default_app(&upstream);

    let (status, body) = post_json(&app.router, "/generate", r#"{"prompt":"Hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": GENERATION_FAILED }));
    assert!(!body.to_string().contains("rate limited"));
}

#[tokio::test]
async fn test_empty_choices_is_a_generation_failure() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .expect(2)
        .mount(&upstream)
        .await;
    let app = default_app(&upstream);

    for _ in 0..2 {
        let (status, body) = post_json(&app.router, "/generate", r#"{"prompt":"Hi"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": GENERATION_FAILED }));
    }
}

#[tokio::test]
async fn test_mock_mode_skips_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("real")))
        .expect(0)
        .mount(&upstream)
        .await;
    let app = build_app(&upstream, true, InMemoryFeedbackRepository::default(), Vec::new());

    let (status, body) = post_json(&app.router, "/generate", r#"{"prompt":"Demo"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "content": mock_content("Demo") }));
    assert!(body["content"].as_str().unwrap().contains("\"Demo\""));
}

#[tokio::test]
async fn test_feedback_is_stored() {
    let upstream = MockServer::start().await;
    let app = default_app(&upstream);

    let (status, body) =
        post_json(&app.router, "/feedback", r#"{"score":5,"content":"Great"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));
    assert_eq!(app.feedback.count().await.unwrap(), 1);

    let rows = app.feedback.rows.lock().unwrap();
    assert_eq!(rows[0].score, 5);
    assert_eq!(rows[0].content, "Great");
}

#[tokio::test]
async fn test_invalid_feedback_stores_nothing() {
    let upstream = MockServer::start().await;
    let app = default_app(&upstream);

    for body in [r#"{"score":5}"#, r#"{"score":"5","content":"x"}"#, r#"{"content":"x"}"#] {
        let (status, json) = post_json(&app.router, "/feedback", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json, json!({ "error": "Invalid feedback" }));
    }
    assert_eq!(app.feedback.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_feedback_store_failure_is_generic() {
    let upstream = MockServer::start().await;
    let failing = InMemoryFeedbackRepository {
        fail: true,
        ..InMemoryFeedbackRepository::default()
    };
    let app = build_app(&upstream, false, failing, Vec::new());

    let (status, body) =
        post_json(&app.router, "/feedback", r#"{"score":1,"content":"x"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Failed to save feedback. Please try again later." })
    );
    assert!(!body.to_string().contains("password"));
}

#[tokio::test]
async fn test_health_and_liveness() {
    let upstream = MockServer::start().await;
    let app = default_app(&upstream);

    let (status, body) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = get(&app.router, "/live").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reports_failing_checks() {
    let upstream = MockServer::start().await;
    let checks: Vec<Arc<dyn HealthCheck>> = vec![
        Arc::new(StaticCheck {
            name: "database",
            healthy: true,
        }),
        Arc::new(StaticCheck {
            name: "cache",
            healthy: false,
        }),
    ];
    let app = build_app(&upstream, false, InMemoryFeedbackRepository::default(), checks);

    let (status, body) = get(&app.router, "/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({
            "status": "not_ready",
            "checks": [
                { "name": "database", "healthy": true },
                { "name": "cache", "healthy": false }
            ]
        })
    );
    assert!(!body.to_string().contains("os error"));
}

#[tokio::test]
async fn test_readiness_ok_when_all_checks_pass() {
    let upstream = MockServer::start().await;
    let checks: Vec<Arc<dyn HealthCheck>> = vec![Arc::new(StaticCheck {
        name: "database",
        healthy: true,
    })];
    let app = build_app(&upstream, false, InMemoryFeedbackRepository::default(), checks);

    let (status, body) = get(&app.router, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_openapi_document() {
    let upstream = MockServer::start().await;
    let app = default_app(&upstream);

    let (status, body) = get(&app.router, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/generate"].is_object());
    assert!(body["paths"]["/feedback"].is_object());
}

#[tokio::test]
async fn test_request_id_is_assigned_and_propagated() {
    let upstream = MockServer::start().await;
    let app = default_app(&upstream);

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/live")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
