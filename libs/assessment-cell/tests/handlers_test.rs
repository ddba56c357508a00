use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use assessment_cell::repository::{InMemoryPcosRepository, InMemoryResultRepository};
use assessment_cell::router::assessment_routes;
use assessment_cell::services::{FsfiService, MentalHealthService, PcosService};
use assessment_cell::AssessmentState;
use shared_utils::test_utils::{JwtTestUtils, TestConfig, TestUser};

fn setup() -> (Router, String) {
    let config = TestConfig::default();
    let results = Arc::new(InMemoryResultRepository::new());
    let state = AssessmentState {
        pcos: Arc::new(PcosService::new(Arc::new(InMemoryPcosRepository::new()))),
        mental_health: Arc::new(MentalHealthService::new(results.clone())),
        fsfi: Arc::new(FsfiService::new(results)),
    };
    let app = Router::new().nest("/api", assessment_routes(config.to_arc(), state));
    (app, JwtTestUtils::bearer(&TestUser::default(), &config.jwt_secret))
}

async fn send(app: &Router, method: Method, uri: &str, token: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, token)
        .header(header::CONTENT_TYPE, "application/json");
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn pcos_routes_share_storage() {
    let (app, token) = setup();

    let (status, body) = send(&app, Method::GET, "/api/pcos-assessment/questions", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);
    assert_eq!(body["data"][0]["type"], "yes_no");

    let (status, body) = send(&app, Method::GET, "/api/pcos/latest", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pcos-assessment/submit",
        &token,
        Some(json!({ "responses": [true, "yes", "yes", false] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["score"], 3);
    assert_eq!(body["data"]["result"], "moderate risk");

    let (_, body) = send(&app, Method::GET, "/api/pcos", &token, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = send(&app, Method::GET, "/api/pcos-assessment", &token, None).await;
    assert_eq!(body["data"]["result"], "moderate risk");
}

#[tokio::test]
async fn mental_health_tests_and_results() {
    let (app, token) = setup();

    let (status, body) = send(&app, Method::GET, "/api/mental-health", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::GET, "/api/tests/gad7", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["questions"].as_array().unwrap().len(), 7);
    assert_eq!(body["data"]["questions"][0]["options"][3]["value"], 3);

    let (status, body) = send(&app, Method::GET, "/api/tests/unknown", &token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Test not found");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/test-results",
        &token,
        Some(json!({ "testName": "gad7", "answers": { "q1": 3, "q2": 3, "q3": 3, "q4": 3, "q5": 3 } })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["level"], "severe");

    let (_, body) = send(&app, Method::GET, "/api/mental-health/results?testName=gad7", &token, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = send(&app, Method::GET, "/api/mental-health/results?testName=phq9", &token, None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn fsfi_submission_and_results() {
    let (app, token) = setup();

    let (_, body) = send(&app, Method::GET, "/api/fsfi/test", &token, None).await;
    assert_eq!(body["data"]["name"], "fsfi");

    let answers: serde_json::Map<String, Value> = (1..=19).map(|i| (format!("q{}", i), json!(5))).collect();
    let (status, body) = send(&app, Method::POST, "/api/fsfi", &token, Some(json!({ "answers": answers }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["level"], "normal");
    assert_eq!(body["data"]["domainScores"]["desire"], 6.0);

    let (status, _) = send(&app, Method::POST, "/api/fsfi/submit", &token, Some(json!({ "answers": {} }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/fsfi/my-results", &token, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = send(&app, Method::GET, "/api/test-results", &token, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn assessments_require_auth() {
    let (app, _) = setup();
    let (status, _) = send(&app, Method::GET, "/api/pcos", "", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
