use std::sync::Arc;

use axum::{
    extract::{Extension, Json, Path, Query, State},
    http::StatusCode,
};
use serde_json::{json, Value};

use shared_models::auth::User;
use shared_models::error::AppError;
use shared_models::pagination::PageQuery;

use crate::models::{CreateJournalRequest, JournalListQuery, JournalPage, UpdateJournalRequest};
use crate::services::JournalService;

#[derive(Clone)]
pub struct JournalState {
    pub journals: Arc<JournalService>,
}

fn page_body(page: JournalPage) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": page.journals,
        "total": page.total,
        "page": page.page,
        "pages": page.pages
    }))
}

pub async fn create_journal(
    State(state): State<JournalState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateJournalRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let journal = state.journals.create(&user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": journal
        })),
    ))
}

pub async fn list_journals(
    State(state): State<JournalState>,
    Extension(user): Extension<User>,
    Query(query): Query<JournalListQuery>,
) -> Result<Json<Value>, AppError> {
    let page = state.journals.list(&user.id, &query).await?;
    Ok(page_body(page))
}

pub async fn user_journals(
    State(state): State<JournalState>,
    Extension(user): Extension<User>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let page = state
        .journals
        .list_for_user(&user.id, &user_id, query.normalize())
        .await?;
    Ok(page_body(page))
}

pub async fn get_journal(
    State(state): State<JournalState>,
    Extension(user): Extension<User>,
    Path(journal_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let journal = state.journals.get(&user.id, &journal_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": journal
    })))
}

pub async fn update_journal(
    State(state): State<JournalState>,
    Extension(user): Extension<User>,
    Path(journal_id): Path<String>,
    Json(request): Json<UpdateJournalRequest>,
) -> Result<Json<Value>, AppError> {
    let journal = state.journals.update(&user.id, &journal_id, request).await?;

    Ok(Json(json!({
        "success": true,
        "data": journal
    })))
}

pub async fn delete_journal(
    State(state): State<JournalState>,
    Extension(user): Extension<User>,
    Path(journal_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state.journals.delete(&user.id, &journal_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Journal deleted successfully"
    })))
}
