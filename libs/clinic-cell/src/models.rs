use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::{DatabaseError, Document};
use shared_models::error::AppError;
use shared_models::time::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitPaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Document for Clinic {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Clinic {
    /// Clinics that list no services accept any.
    pub fn offers(&self, service: &str) -> bool {
        self.services.is_empty()
            || self
                .services
                .iter()
                .any(|offered| offered.eq_ignore_ascii_case(service.trim()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicBooking {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub clinic_id: String,
    pub service: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub time_slot: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    pub payment_status: VisitPaymentStatus,
    pub status: VisitStatus,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Document for ClinicBooking {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Whole rupees.
    pub price: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tests: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Document for Diagnostic {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticBooking {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub diagnostic_id: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub time_slot: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    pub payment_status: VisitPaymentStatus,
    pub status: VisitStatus,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Document for DiagnosticBooking {
    fn id(&self) -> &str {
        &self.id
    }
}

// ==============================================================================
// REQUESTS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateClinicBookingRequest {
    pub clinic_id: String,
    pub service: String,
    pub date: String,
    pub time_slot: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDiagnosticBookingRequest {
    pub diagnostic_id: String,
    pub date: String,
    pub time_slot: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisitPaymentRequest {
    pub booking_id: String,
    pub payment_id: String,
}

/// Catalogue entries inserted by the seed binary.
#[derive(Debug, Clone, Default)]
pub struct NewClinic {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub services: Vec<String>,
    pub rating: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewDiagnostic {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub tests: Vec<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("Clinic not found")]
    ClinicNotFound,

    #[error("Diagnostic not found")]
    DiagnosticNotFound,

    #[error("Booking not found")]
    BookingNotFound,

    #[error("service '{0}' is not offered by this clinic")]
    ServiceNotOffered(String),

    #[error("Invalid date format")]
    InvalidDate,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        match err {
            ClinicError::ClinicNotFound
            | ClinicError::DiagnosticNotFound
            | ClinicError::BookingNotFound => AppError::NotFound(err.to_string()),
            ClinicError::Validation(msg) => AppError::ValidationError(msg),
            ClinicError::Database(e) => e.into(),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
