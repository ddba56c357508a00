use std::sync::Arc;

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};

use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{CreateClinicBookingRequest, CreateDiagnosticBookingRequest, VisitPaymentRequest};
use crate::services::{ClinicService, DiagnosticService};

#[derive(Clone)]
pub struct ClinicState {
    pub clinics: Arc<ClinicService>,
    pub diagnostics: Arc<DiagnosticService>,
}

// ==============================================================================
// CLINICS
// ==============================================================================

pub async fn list_clinics(State(state): State<ClinicState>) -> Result<Json<Value>, AppError> {
    let clinics = state.clinics.clinics().await?;

    Ok(Json(json!({
        "success": true,
        "data": clinics
    })))
}

pub async fn create_clinic_booking(
    State(state): State<ClinicState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateClinicBookingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking = state.clinics.create_booking(&user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": booking
        })),
    ))
}

pub async fn my_clinic_bookings(
    State(state): State<ClinicState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let bookings = state.clinics.my_bookings(&user.id).await?;

    Ok(Json(json!({
        "success": true,
        "data": bookings
    })))
}

pub async fn verify_clinic_payment(
    State(state): State<ClinicState>,
    Extension(user): Extension<User>,
    Json(request): Json<VisitPaymentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = state.clinics.verify_payment(&user.id, request).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Payment verified successfully",
        "data": booking
    })))
}

// ==============================================================================
// DIAGNOSTICS
// ==============================================================================

pub async fn list_diagnostics(State(state): State<ClinicState>) -> Result<Json<Value>, AppError> {
    let diagnostics = state.diagnostics.diagnostics().await?;

    Ok(Json(json!({
        "success": true,
        "data": diagnostics
    })))
}

pub async fn my_diagnostic_bookings(
    State(state): State<ClinicState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let bookings = state.diagnostics.my_bookings(&user.id).await?;

    Ok(Json(json!({
        "success": true,
        "data": bookings
    })))
}

pub async fn create_diagnostic_booking(
    State(state): State<ClinicState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateDiagnosticBookingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking = state.diagnostics.create_booking(&user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": booking
        })),
    ))
}

pub async fn verify_diagnostic_payment(
    State(state): State<ClinicState>,
    Extension(user): Extension<User>,
    Json(request): Json<VisitPaymentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = state.diagnostics.verify_payment(&user.id, request).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Payment verified successfully",
        "data": booking
    })))
}
