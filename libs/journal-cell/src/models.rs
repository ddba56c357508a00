use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::{DatabaseError, Document};
use shared_models::error::AppError;
use shared_models::time::timestamp;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub category: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Document for Journal {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Repository-level filter. `created` is a half-open `[start, end)` range.
#[derive(Debug, Clone, Default)]
pub struct JournalFilter {
    pub user_id: String,
    pub search: Option<String>,
    pub category: Option<String>,
    pub created: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalPage {
    pub journals: Vec<Journal>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

// ==============================================================================
// REQUESTS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateJournalRequest {
    pub title: Option<String>,
    pub content: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateJournalRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JournalListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Journal not found")]
    NotFound,

    #[error("You can only view your own journals")]
    Forbidden,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::NotFound => AppError::NotFound(err.to_string()),
            JournalError::Forbidden => AppError::Forbidden(err.to_string()),
            JournalError::Validation(msg) => AppError::ValidationError(msg),
            JournalError::Database(e) => e.into(),
        }
    }
}
