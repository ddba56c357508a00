use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use doctor_cell::models::{DoctorSummary, SessionType};
use payment_cell::PaymentError;
use shared_database::{DatabaseError, Document};
use shared_models::error::AppError;
use shared_models::time::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Rejected => "rejected",
        }
    }

    /// Whether a booking in this state still holds its time slot.
    pub fn holds_slot(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub doctor_id: String,
    pub session_type: SessionType,
    pub date: NaiveDate,
    pub time_slot: String,
    pub status: BookingStatus,
    /// Whole rupees.
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_payment_id: Option<String>,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Document for Booking {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingWithDoctor {
    #[serde(flatten)]
    pub booking: Booking,
    pub doctor: Option<DoctorSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SlotAvailability {
    pub slots: Vec<TimeSlot>,
    pub message: Option<&'static str>,
}

// ==============================================================================
// REQUESTS AND RESPONSES
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub doctor_id: String,
    pub session_type: String,
    pub date: String,
    pub time_slot: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    pub booking_id: String,
    pub razorpay_order_id: String,
    pub amount: i64,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub booking_id: String,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotQuery {
    pub doctor_id: Option<String>,
    pub date: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    #[error("invalid session type")]
    InvalidSessionType,

    #[error("booking date must be in the future")]
    PastDate,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("doctor is not available for bookings")]
    DoctorUnavailable,

    #[error("{0} not available with this doctor")]
    SessionNotOffered(SessionType),

    #[error("time slot already booked")]
    SlotTaken,

    #[error("Booking not found")]
    NotFound,

    #[error("booking is already paid")]
    AlreadyPaid,

    #[error("order ID does not match booking")]
    OrderMismatch,

    #[error("invalid payment signature")]
    InvalidSignature,

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::DoctorNotFound | BookingError::NotFound => AppError::NotFound(err.to_string()),
            BookingError::SlotTaken | BookingError::AlreadyPaid => AppError::Conflict(err.to_string()),
            BookingError::Validation(msg) => AppError::ValidationError(msg),
            BookingError::Payment(e) => e.into(),
            BookingError::Database(e) => e.into(),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
