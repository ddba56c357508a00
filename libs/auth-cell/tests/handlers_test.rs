use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_cell::handlers::AuthState;
use auth_cell::repository::{InMemoryOtpRepository, InMemoryUserRepository};
use auth_cell::router::{account_routes, auth_routes};
use auth_cell::services::{AuthService, UserService};
use shared_utils::test_utils::{JwtTestUtils, TestConfig, TestUser};

fn app() -> (Router, TestConfig) {
    let test_config = TestConfig::default();
    let config = test_config.to_arc();
    let users = Arc::new(InMemoryUserRepository::new());
    let otps = Arc::new(InMemoryOtpRepository::new());
    let state = AuthState {
        auth: Arc::new(AuthService::new(users.clone(), otps, config.clone())),
        users: Arc::new(UserService::new(users)),
    };

    let router = Router::new()
        .nest("/user", auth_routes(config.clone(), state.clone()))
        .nest("/api", account_routes(config, state));
    (router, test_config)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn register_then_fetch_profile() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        post_json(
            "/user/register",
            json!({
                "name": "Meera",
                "email": "meera@example.com",
                "phoneNumber": "9000000001",
                "password": "secret1"
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert!(body["user"].get("password").is_none());

    let token = body["token"].as_str().unwrap().to_string();
    let (status, body) = send(&app, get("/api/users/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "meera@example.com");
    assert_eq!(body["data"]["phoneNumber"], "9000000001");

    let (status, _) = send(&app, get("/user/profile", &token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let (app, _) = app();
    let payload = json!({
        "name": "Meera",
        "email": "meera@example.com",
        "phoneNumber": "9000000001",
        "password": "secret1"
    });

    send(&app, post_json("/user/register", payload.clone(), None)).await;
    let (status, body) = send(&app, post_json("/user/register", payload, None)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "user already exists");
}

#[tokio::test]
async fn bad_login_is_unauthorized() {
    let (app, _) = app();
    let (status, body) = send(
        &app,
        post_json(
            "/user/login",
            json!({"email": "ghost@example.com", "password": "whatever"}),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid credentials");
}

#[tokio::test]
async fn missing_fields_report_validation_errors() {
    let (app, _) = app();
    let (status, body) = send(&app, post_json("/user/register", json!({"email": "x@y.co"}), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name is required");
}

#[tokio::test]
async fn protected_routes_need_a_token() {
    let (app, _) = app();
    let request = Request::builder().uri("/api/users/me").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authorization header required");
}

#[tokio::test]
async fn token_for_unknown_user_is_not_found() {
    let (app, config) = app();
    let token = JwtTestUtils::create_test_token(&TestUser::default(), &config.jwt_secret, None);
    let (status, _) = send(&app, get("/api/users/me", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn forgot_password_for_unknown_email_is_not_found() {
    let (app, _) = app();
    let (status, body) = send(
        &app,
        post_json("/user/forgot-password", json!({"email": "ghost@example.com"}), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "user not found");
}
