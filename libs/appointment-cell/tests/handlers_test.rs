use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::repository::InMemoryBookingRepository;
use appointment_cell::router::appointment_routes;
use appointment_cell::services::{AvailabilityService, BookingService};
use appointment_cell::AppointmentState;
use doctor_cell::models::{ConsultationFees, CreateDoctorRequest, Doctor, Timing};
use doctor_cell::repository::InMemoryDoctorRepository;
use doctor_cell::services::DoctorService;
use payment_cell::client::payment_signature;
use payment_cell::RazorpayClient;
use shared_utils::test_utils::{JwtTestUtils, MockRazorpayResponses, TestConfig, TestUser};

struct TestApp {
    app: Router,
    token: String,
    doctor: Doctor,
    _server: MockServer,
}

async fn setup() -> TestApp {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockRazorpayResponses::order_response("order_T1", 80000, "order_x"),
        ))
        .mount(&server)
        .await;

    let config = TestConfig::default().with_razorpay_base_url(&format!("{}/v1", server.uri()));
    let app_config = config.to_arc();

    let doctor_repo = Arc::new(InMemoryDoctorRepository::new());
    let booking_repo = Arc::new(InMemoryBookingRepository::new());
    let doctor = DoctorService::new(doctor_repo.clone())
        .create_doctor(CreateDoctorRequest {
            name: "Dr. Rhea".to_string(),
            email: "rhea@clinic.in".to_string(),
            specialization: "Obstetrician".to_string(),
            consultation_fees: Some(ConsultationFees {
                video_call: 800,
                audio_call: 0,
                in_clinic: 1200,
            }),
            timing: Some(Timing {
                from: "10:00 AM".to_string(),
                to: "12:00 PM".to_string(),
            }),
            is_approved: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    let gateway = Arc::new(RazorpayClient::new(&app_config));
    let state = AppointmentState {
        booking: Arc::new(BookingService::new(
            booking_repo.clone(),
            doctor_repo.clone(),
            gateway,
            app_config.payment_currency.clone(),
        )),
        availability: Arc::new(AvailabilityService::new(doctor_repo, booking_repo)),
    };

    TestApp {
        app: Router::new().nest("/api", appointment_routes(app_config, state)),
        token: JwtTestUtils::bearer(&TestUser::default(), &config.jwt_secret),
        doctor,
        _server: server,
    }
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

fn next_week() -> String {
    (Utc::now().date_naive() + Duration::days(7)).format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn time_slots_follow_doctor_timing_and_bookings() {
    let t = setup().await;
    let date = next_week();

    let (status, body) = send(
        &t.app,
        Method::POST,
        "/api/bookings",
        &t.token,
        Some(json!({
            "doctorId": t.doctor.id,
            "sessionType": "Video Call",
            "date": date,
            "timeSlot": "10:30"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["razorpayOrderId"], "order_T1");
    assert_eq!(body["data"]["amount"], 800);
    assert_eq!(body["data"]["status"], "pending");

    let uri = format!("/api/time-slots?doctorId={}&date={}", t.doctor.id, date);
    let (status, body) = send(&t.app, Method::GET, &uri, &t.token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            {"time": "10:00", "available": true},
            {"time": "10:30", "available": false},
            {"time": "11:00", "available": true},
            {"time": "11:30", "available": true}
        ])
    );
}

#[tokio::test]
async fn time_slots_require_doctor_and_date() {
    let t = setup().await;
    let (status, body) = send(&t.app, Method::GET, "/api/time-slots?date=2030-01-01", &t.token, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "doctorId and date are required");
}

#[tokio::test]
async fn double_booking_is_conflict() {
    let t = setup().await;
    let booking = json!({
        "doctorId": t.doctor.id,
        "sessionType": "In-Clinic",
        "date": next_week(),
        "timeSlot": "11:00"
    });

    let (status, _) = send(&t.app, Method::POST, "/api/bookings", &t.token, Some(booking.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&t.app, Method::POST, "/api/bookings", &t.token, Some(booking)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "time slot already booked");
}

#[tokio::test]
async fn signed_payment_confirms_and_lists_booking() {
    let t = setup().await;
    let (_, created) = send(
        &t.app,
        Method::POST,
        "/api/bookings",
        &t.token,
        Some(json!({
            "doctorId": t.doctor.id,
            "sessionType": "Video Call",
            "date": next_week(),
            "timeSlot": "11:30"
        })),
    )
    .await;
    let booking_id = created["data"]["bookingId"].as_str().unwrap().to_string();

    let signature = payment_signature("rzp_test_secret", "order_T1", "pay_T1").unwrap();
    let (status, body) = send(
        &t.app,
        Method::POST,
        "/api/bookings/verify",
        &t.token,
        Some(json!({
            "bookingId": booking_id,
            "razorpayOrderId": "order_T1",
            "razorpayPaymentId": "pay_T1",
            "razorpaySignature": signature
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "confirmed");
    assert_eq!(body["data"]["paymentStatus"], "paid");

    let (status, body) = send(&t.app, Method::GET, "/api/bookings/my-with-doctors?page=1&limit=5", &t.token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["limit"], 5);
    assert_eq!(body["data"][0]["doctor"]["name"], "Dr. Rhea");
    assert_eq!(body["data"][0]["sessionType"], "Video Call");

    let (_, body) = send(&t.app, Method::GET, "/api/sessions/active", &t.token, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn forged_signature_is_rejected() {
    let t = setup().await;
    let (_, created) = send(
        &t.app,
        Method::POST,
        "/api/bookings",
        &t.token,
        Some(json!({
            "doctorId": t.doctor.id,
            "sessionType": "Video Call",
            "date": next_week(),
            "timeSlot": "10:00"
        })),
    )
    .await;

    let (status, body) = send(
        &t.app,
        Method::POST,
        "/api/bookings/verify",
        &t.token,
        Some(json!({
            "bookingId": created["data"]["bookingId"],
            "razorpayOrderId": "order_T1",
            "razorpayPaymentId": "pay_T1",
            "razorpaySignature": "deadbeef"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid payment signature");
}
