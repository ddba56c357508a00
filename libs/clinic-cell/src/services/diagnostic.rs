use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use shared_database::ids::{new_id, parse_id};
use shared_utils::validation::required;

use crate::models::{
    ClinicError, CreateDiagnosticBookingRequest, Diagnostic, DiagnosticBooking, NewDiagnostic,
    VisitPaymentRequest, VisitPaymentStatus, VisitStatus,
};
use crate::repository::DiagnosticRepository;
use crate::services::parse_visit_date;

pub struct DiagnosticService {
    diagnostics: Arc<dyn DiagnosticRepository>,
}

impl DiagnosticService {
    pub fn new(diagnostics: Arc<dyn DiagnosticRepository>) -> Self {
        Self { diagnostics }
    }

    pub async fn diagnostics(&self) -> Result<Vec<Diagnostic>, ClinicError> {
        Ok(self.diagnostics.diagnostics().await?)
    }

    /// Adds a package unless one with the same name exists. Returns whether it was inserted.
    pub async fn add_diagnostic(&self, diagnostic: NewDiagnostic) -> Result<bool, ClinicError> {
        let name = required("name", &diagnostic.name).map_err(ClinicError::Validation)?;
        if diagnostic.price <= 0 {
            return Err(ClinicError::Validation("price must be greater than 0".to_string()));
        }
        if self.diagnostics.find_diagnostic_by_name(name).await?.is_some() {
            return Ok(false);
        }

        self.diagnostics
            .create_diagnostic(Diagnostic {
                id: new_id(),
                name: name.to_string(),
                description: diagnostic.description,
                price: diagnostic.price,
                category: diagnostic.category,
                tests: diagnostic.tests,
                created_at: Utc::now(),
            })
            .await?;
        Ok(true)
    }

    /// The amount is always the package price at booking time.
    #[instrument(skip(self, request), fields(diagnostic_id = %request.diagnostic_id))]
    pub async fn create_booking(
        &self,
        user_id: &str,
        request: CreateDiagnosticBookingRequest,
    ) -> Result<DiagnosticBooking, ClinicError> {
        let diagnostic_id =
            required("diagnosticId", &request.diagnostic_id).map_err(ClinicError::Validation)?;
        let diagnostic_id = parse_id("diagnostic", diagnostic_id)?;
        let time_slot = required("timeSlot", &request.time_slot).map_err(ClinicError::Validation)?;
        let date = parse_visit_date(&request.date)?;

        let diagnostic = self
            .diagnostics
            .find_diagnostic(&diagnostic_id)
            .await?
            .ok_or(ClinicError::DiagnosticNotFound)?;

        let now = Utc::now();
        let booking = self
            .diagnostics
            .create_booking(DiagnosticBooking {
                id: new_id(),
                user_id: user_id.to_string(),
                diagnostic_id,
                date,
                time_slot: time_slot.to_string(),
                amount: diagnostic.price,
                payment_id: None,
                payment_status: VisitPaymentStatus::Pending,
                status: VisitStatus::Pending,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!("Created diagnostic booking {} for {}", booking.id, diagnostic.name);
        Ok(booking)
    }

    pub async fn my_bookings(&self, user_id: &str) -> Result<Vec<DiagnosticBooking>, ClinicError> {
        Ok(self.diagnostics.bookings_by_user(user_id).await?)
    }

    pub async fn verify_payment(
        &self,
        user_id: &str,
        request: VisitPaymentRequest,
    ) -> Result<DiagnosticBooking, ClinicError> {
        let booking_id = required("bookingId", &request.booking_id).map_err(ClinicError::Validation)?;
        let payment_id = required("paymentId", &request.payment_id).map_err(ClinicError::Validation)?;
        let booking_id = parse_id("booking", booking_id)?;

        let mut booking = self
            .diagnostics
            .find_booking(&booking_id)
            .await?
            .filter(|b| b.user_id == user_id)
            .ok_or(ClinicError::BookingNotFound)?;

        booking.payment_id = Some(payment_id.to_string());
        booking.payment_status = VisitPaymentStatus::Completed;
        booking.status = VisitStatus::Confirmed;
        booking.updated_at = Utc::now();
        self.diagnostics.update_booking(&booking).await?;

        info!("Diagnostic booking {} paid with {}", booking.id, payment_id);
        Ok(booking)
    }
}
