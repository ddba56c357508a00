use std::sync::Arc;

use axum::{
    extract::{Extension, Json, Query, State},
    http::StatusCode,
};
use serde_json::{json, Value};

use shared_models::auth::User;
use shared_models::error::AppError;
use shared_models::pagination::PageQuery;

use crate::models::{CreateBookingRequest, TimeSlotQuery, VerifyPaymentRequest};
use crate::services::{AvailabilityService, BookingService};

#[derive(Clone)]
pub struct AppointmentState {
    pub booking: Arc<BookingService>,
    pub availability: Arc<AvailabilityService>,
}

pub async fn time_slots(
    State(state): State<AppointmentState>,
    Query(query): Query<TimeSlotQuery>,
) -> Result<Json<Value>, AppError> {
    let (Some(doctor_id), Some(date)) = (query.doctor_id, query.date) else {
        return Err(AppError::BadRequest("doctorId and date are required".to_string()));
    };

    let availability = state.availability.time_slots(&doctor_id, &date).await?;
    let mut body = json!({
        "success": true,
        "data": availability.slots
    });
    if let Some(message) = availability.message {
        body["message"] = json!(message);
    }
    Ok(Json(body))
}

pub async fn create_booking(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let created = state.booking.create_booking(&user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": created
        })),
    ))
}

pub async fn verify_payment(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Json(request): Json<VerifyPaymentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = state.booking.verify_payment(&user.id, request).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Payment verified successfully",
        "data": booking
    })))
}

pub async fn my_bookings(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let pagination = query.normalize();
    let (bookings, total) = state.booking.user_bookings(&user.id, pagination).await?;

    Ok(Json(json!({
        "success": true,
        "data": bookings,
        "total": total,
        "page": pagination.page,
        "limit": pagination.limit
    })))
}

pub async fn active_sessions(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let bookings = state.booking.active_bookings(&user.id).await?;

    Ok(Json(json!({
        "success": true,
        "data": bookings
    })))
}
