use std::sync::Arc;

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};

use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{PeriodCycleRequest, PregnancyRequest, SymptomsRequest, WeightRequest};
use crate::services::{PeriodService, PregnancyService, SymptomsService, WeightService};

#[derive(Clone)]
pub struct TrackerState {
    pub period: Arc<PeriodService>,
    pub pregnancy: Arc<PregnancyService>,
    pub symptoms: Arc<SymptomsService>,
    pub weight: Arc<WeightService>,
}

fn created(data: Value) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": data
        })),
    )
}

// ==============================================================================
// PERIOD
// ==============================================================================

pub async fn get_period_cycles(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let cycles = state.period.cycles(&user.id).await?;
    Ok(Json(json!({ "success": true, "data": cycles })))
}

pub async fn add_period_cycle(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
    Json(request): Json<PeriodCycleRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let cycle = state.period.add_cycle(&user.id, request).await?;
    Ok(created(json!(cycle)))
}

pub async fn reset_period_tracker(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    state.period.reset(&user.id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Period tracker reset successfully"
    })))
}

// ==============================================================================
// PREGNANCY
// ==============================================================================

pub async fn get_pregnancy(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let tracker = state.pregnancy.current(&user.id).await?;
    Ok(Json(json!({ "success": true, "data": tracker })))
}

pub async fn add_pregnancy_entry(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
    Json(request): Json<PregnancyRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let tracker = state.pregnancy.upsert(&user.id, request).await?;
    Ok(created(json!(tracker)))
}

// ==============================================================================
// SYMPTOMS
// ==============================================================================

pub async fn get_symptoms(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let history = state.symptoms.history(&user.id).await?;
    Ok(Json(json!({ "success": true, "data": history })))
}

pub async fn submit_symptoms(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
    Json(request): Json<SymptomsRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let entry = state.symptoms.submit(&user.id, request).await?;
    Ok(created(json!(entry)))
}

// ==============================================================================
// WEIGHT & METABOLIC WELLNESS
// ==============================================================================

pub async fn get_weight_entries(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let entries = state.weight.entries(&user.id).await?;
    Ok(Json(json!({ "success": true, "data": entries })))
}

pub async fn add_weight_entry(
    State(state): State<TrackerState>,
    Extension(user): Extension<User>,
    Json(request): Json<WeightRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let entry = state.weight.add_entry(&user.id, request).await?;
    Ok(created(json!(entry)))
}
