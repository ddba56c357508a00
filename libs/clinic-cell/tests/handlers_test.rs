use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use clinic_cell::models::{NewClinic, NewDiagnostic};
use clinic_cell::repository::{InMemoryClinicRepository, InMemoryDiagnosticRepository};
use clinic_cell::router::clinic_routes;
use clinic_cell::services::{ClinicService, DiagnosticService};
use clinic_cell::ClinicState;
use shared_utils::test_utils::{JwtTestUtils, TestConfig, TestUser};

async fn setup() -> (Router, String) {
    let config = TestConfig::default();
    let clinics = Arc::new(ClinicService::new(Arc::new(InMemoryClinicRepository::new())));
    let diagnostics = Arc::new(DiagnosticService::new(Arc::new(InMemoryDiagnosticRepository::new())));

    clinics
        .add_clinic(NewClinic {
            name: "Nirmala Clinic".to_string(),
            city: "Jaipur".to_string(),
            services: vec!["Fertility".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    diagnostics
        .add_diagnostic(NewDiagnostic {
            name: "Thyroid Profile".to_string(),
            price: 799,
            ..Default::default()
        })
        .await
        .unwrap();

    let state = ClinicState { clinics, diagnostics };
    let app = Router::new().nest("/api", clinic_routes(config.to_arc(), state));
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
async fn clinic_booking_flow() {
    let (app, token) = setup().await;

    let (status, body) = send(&app, Method::GET, "/api/clinics", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    let clinic_id = body["data"][0]["_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clinic-bookings",
        &token,
        Some(json!({
            "clinicId": clinic_id,
            "service": "Fertility",
            "date": "2030-01-15",
            "timeSlot": "11:00 AM",
            "amount": 1500
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["paymentStatus"], "pending");
    let booking_id = body["data"]["_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clinic-bookings/verify-payment",
        &token,
        Some(json!({ "bookingId": booking_id, "paymentId": "pay_clinic" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Payment verified successfully");

    let (_, body) = send(&app, Method::GET, "/api/clinic-bookings/my-bookings", &token, None).await;
    assert_eq!(body["data"][0]["paymentStatus"], "completed");
    assert_eq!(body["data"][0]["status"], "confirmed");
}

#[tokio::test]
async fn diagnostic_booking_flow() {
    let (app, token) = setup().await;

    let (status, body) = send(&app, Method::GET, "/api/public/diagnostics", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    let diagnostic_id = body["data"][0]["_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/diagnostics-bookings",
        &token,
        Some(json!({
            "diagnosticId": diagnostic_id,
            "date": "2030-02-01",
            "timeSlot": "07:30"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["amount"], 799);

    let (_, body) = send(&app, Method::GET, "/api/diagnosticsUsers", &token, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_clinic_is_404() {
    let (app, token) = setup().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clinic-bookings",
        &token,
        Some(json!({
            "clinicId": "65f1c0ffee0000000000abcd",
            "service": "Fertility",
            "date": "2030-01-15",
            "timeSlot": "11:00 AM",
            "amount": 1500
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Clinic not found");
}
