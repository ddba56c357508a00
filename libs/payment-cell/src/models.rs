use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Serialize)]
pub struct CreateOrderRequest<'a> {
    pub amount: i64,
    pub currency: &'a str,
    pub receipt: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayOrder {
    pub id: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct RefundRequest {
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayRefund {
    pub id: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment gateway is not configured")]
    NotConfigured,

    #[error("payment gateway returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("payment gateway response missing {0}")]
    MissingField(&'static str),

    #[error("invalid payment signature")]
    InvalidSignature,

    #[error("payment gateway request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::InvalidSignature => AppError::BadRequest(err.to_string()),
            _ => AppError::ExternalService(err.to_string()),
        }
    }
}
