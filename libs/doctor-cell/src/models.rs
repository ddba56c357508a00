use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::{DatabaseError, Document};
use shared_models::error::AppError;
use shared_models::time::timestamp;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_fees: Option<ConsultationFees>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
    #[serde(default)]
    pub package_includes: Vec<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Document for Doctor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Doctor {
    /// Fee in whole rupees, `None` when the doctor does not offer the session type.
    pub fn fee_for(&self, session: SessionType) -> Option<i64> {
        let fees = self.consultation_fees.as_ref()?;
        let fee = match session {
            SessionType::VideoCall => fees.video_call,
            SessionType::AudioCall => fees.audio_call,
            SessionType::InClinic => fees.in_clinic,
        };
        (fee > 0).then_some(fee)
    }

    pub fn summary(&self) -> DoctorSummary {
        DoctorSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            specialization: self.specialization.clone(),
            image: self.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultationFees {
    pub video_call: i64,
    pub audio_call: i64,
    pub in_clinic: i64,
}

/// Working hours as entered by the clinic, e.g. `"09:00 AM"` to `"05:00 PM"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Timing {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "Video Call")]
    VideoCall,
    #[serde(rename = "Audio Call")]
    AudioCall,
    #[serde(rename = "In-Clinic")]
    InClinic,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::VideoCall => "Video Call",
            SessionType::AudioCall => "Audio Call",
            SessionType::InClinic => "In-Clinic",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Video Call" => Some(SessionType::VideoCall),
            "Audio Call" => Some(SessionType::AudioCall),
            "In-Clinic" => Some(SessionType::InClinic),
            _ => None,
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==============================================================================
// QUERIES AND REQUESTS
// ==============================================================================

#[derive(Debug, Clone, Default)]
pub struct DoctorFilter {
    pub search: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DoctorListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorPage {
    pub doctors: Vec<Doctor>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_doctors: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub experience: Option<String>,
    pub qualifications: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub languages: Vec<String>,
    pub consultation_fees: Option<ConsultationFees>,
    pub timing: Option<Timing>,
    pub package_includes: Vec<String>,
    pub is_approved: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub experience: Option<String>,
    pub qualifications: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub languages: Option<Vec<String>>,
    pub consultation_fees: Option<ConsultationFees>,
    pub timing: Option<Timing>,
    pub package_includes: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub is_approved: Option<bool>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("doctor with this email already exists")]
    EmailTaken,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound(err.to_string()),
            DoctorError::EmailTaken => AppError::Conflict(err.to_string()),
            DoctorError::Validation(msg) => AppError::ValidationError(msg),
            DoctorError::Database(e) => e.into(),
        }
    }
}
