use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::{DatabaseError, Document};
use shared_models::error::AppError;
use shared_models::time::timestamp;

// ==============================================================================
// PERIOD
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCycle {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeriodCycleRequest {
    pub start_date: String,
    pub end_date: Option<String>,
    pub cycle_length: Option<i32>,
    pub flow: Option<String>,
}

// ==============================================================================
// PREGNANCY
// ==============================================================================

/// One tracker per user; later entries overwrite it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyTracker {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(with = "timestamp")]
    pub due_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub last_period_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl PregnancyTracker {
    /// Completed weeks since the last period, never negative.
    pub fn current_week(&self, now: DateTime<Utc>) -> i64 {
        ((now - self.last_period_date).num_days() / 7).max(0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyView {
    #[serde(flatten)]
    pub tracker: PregnancyTracker,
    pub current_week: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PregnancyRequest {
    pub last_period_date: String,
    pub due_date: Option<String>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

// ==============================================================================
// SYMPTOMS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymptomsKind {
    Period,
    Pregnancy,
}

impl SymptomsKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "period" => Some(SymptomsKind::Period),
            "pregnancy" => Some(SymptomsKind::Pregnancy),
            _ => None,
        }
    }
}

/// Daily check-in. Each category is a list of tags picked in the app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SymptomTags {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub what_are_you_feeling_today: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sex_and_sex_drive: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mood: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub symptoms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub physical_activity: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub digestion_and_stool: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pregnancy_test: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ovulation_test: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vaginal_discharge: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomsTracking {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: SymptomsKind,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub tags: SymptomTags,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymptomsRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: Option<String>,
    #[serde(flatten)]
    pub tags: SymptomTags,
}

// ==============================================================================
// WEIGHT & METABOLIC WELLNESS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeightRequest {
    pub date: Option<String>,
    pub weight: f64,
    pub height: Option<f64>,
    pub waist_size: Option<f64>,
    pub notes: Option<String>,
}

macro_rules! impl_document {
    ($($ty:ty),*) => {
        $(impl Document for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_document!(PeriodCycle, PregnancyTracker, SymptomsTracking, WeightEntry);

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{0}")]
    Validation(String),

    #[error("invalid {0} format")]
    InvalidDate(&'static str),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::Validation(msg) => AppError::ValidationError(msg),
            TrackerError::InvalidDate(_) => AppError::BadRequest(err.to_string()),
            TrackerError::Database(e) => e.into(),
        }
    }
}
