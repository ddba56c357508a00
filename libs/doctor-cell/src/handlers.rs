use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::DoctorListQuery;
use crate::services::DoctorService;

pub async fn list_doctors(
    State(service): State<Arc<DoctorService>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    let page = service.list_doctors(&query).await?;

    Ok(Json(json!({
        "success": true,
        "data": page.doctors,
        "current_page": page.current_page,
        "total_pages": page.total_pages,
        "total_doctors": page.total_doctors,
        "has_next_page": page.has_next_page,
        "has_previous_page": page.has_previous_page
    })))
}

pub async fn get_doctor(
    State(service): State<Arc<DoctorService>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = service.get_doctor(&doctor_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": doctor
    })))
}
