use std::sync::Arc;

use axum::{
    extract::{Extension, Json, Path, Query, State},
    http::StatusCode,
};
use serde_json::{json, Value};

use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{FsfiSubmission, PcosSubmission, ResultsQuery, TestSubmission};
use crate::services::{FsfiService, MentalHealthService, PcosService};

#[derive(Clone)]
pub struct AssessmentState {
    pub pcos: Arc<PcosService>,
    pub mental_health: Arc<MentalHealthService>,
    pub fsfi: Arc<FsfiService>,
}

fn created(data: impl serde::Serialize) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": data
        })),
    )
}

// ==============================================================================
// PCOS
// ==============================================================================

pub async fn pcos_questions(State(state): State<AssessmentState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.pcos.questions()
    }))
}

pub async fn submit_pcos(
    State(state): State<AssessmentState>,
    Extension(user): Extension<User>,
    Json(submission): Json<PcosSubmission>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let assessment = state.pcos.submit(&user.id, submission).await?;
    Ok(created(assessment))
}

pub async fn pcos_history(
    State(state): State<AssessmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let history = state.pcos.history(&user.id).await?;

    Ok(Json(json!({
        "success": true,
        "data": history
    })))
}

pub async fn latest_pcos(
    State(state): State<AssessmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let latest = state.pcos.latest(&user.id).await?;

    Ok(Json(json!({
        "success": true,
        "data": latest
    })))
}

// ==============================================================================
// MENTAL HEALTH
// ==============================================================================

pub async fn list_tests(State(state): State<AssessmentState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.mental_health.tests()
    }))
}

pub async fn get_test(
    State(state): State<AssessmentState>,
    Path(test_name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let test = state.mental_health.test_by_name(&test_name)?;

    Ok(Json(json!({
        "success": true,
        "data": test
    })))
}

pub async fn submit_test(
    State(state): State<AssessmentState>,
    Extension(user): Extension<User>,
    Json(submission): Json<TestSubmission>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let result = state.mental_health.submit(&user.id, submission).await?;
    Ok(created(result))
}

pub async fn test_results(
    State(state): State<AssessmentState>,
    Extension(user): Extension<User>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<Value>, AppError> {
    let results = state
        .mental_health
        .results(&user.id, query.test_name.as_deref())
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": results
    })))
}

// ==============================================================================
// FSFI
// ==============================================================================

pub async fn fsfi_test(State(state): State<AssessmentState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.fsfi.test()
    }))
}

pub async fn submit_fsfi(
    State(state): State<AssessmentState>,
    Extension(user): Extension<User>,
    Json(submission): Json<FsfiSubmission>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let result = state.fsfi.submit(&user.id, submission).await?;
    Ok(created(result))
}

pub async fn fsfi_results(
    State(state): State<AssessmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let results = state.fsfi.my_results(&user.id).await?;

    Ok(Json(json!({
        "success": true,
        "data": results
    })))
}
