use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use shared_database::ids::{new_id, parse_id};
use shared_utils::validation::required;

use crate::models::{
    Clinic, ClinicBooking, ClinicError, CreateClinicBookingRequest, NewClinic, VisitPaymentRequest,
    VisitPaymentStatus, VisitStatus,
};
use crate::repository::ClinicRepository;
use crate::services::parse_visit_date;

pub struct ClinicService {
    clinics: Arc<dyn ClinicRepository>,
}

impl ClinicService {
    pub fn new(clinics: Arc<dyn ClinicRepository>) -> Self {
        Self { clinics }
    }

    pub async fn clinics(&self) -> Result<Vec<Clinic>, ClinicError> {
        Ok(self.clinics.clinics().await?)
    }

    /// Adds a clinic unless one with the same name exists. Returns whether it was inserted.
    pub async fn add_clinic(&self, clinic: NewClinic) -> Result<bool, ClinicError> {
        let name = required("name", &clinic.name).map_err(ClinicError::Validation)?;
        if self.clinics.find_clinic_by_name(name).await?.is_some() {
            return Ok(false);
        }

        self.clinics
            .create_clinic(Clinic {
                id: new_id(),
                name: name.to_string(),
                address: clinic.address,
                city: clinic.city,
                phone: clinic.phone,
                services: clinic.services,
                rating: clinic.rating,
                image: clinic.image,
                created_at: Utc::now(),
            })
            .await?;
        Ok(true)
    }

    #[instrument(skip(self, request), fields(clinic_id = %request.clinic_id))]
    pub async fn create_booking(
        &self,
        user_id: &str,
        request: CreateClinicBookingRequest,
    ) -> Result<ClinicBooking, ClinicError> {
        let clinic_id = required("clinicId", &request.clinic_id).map_err(ClinicError::Validation)?;
        let clinic_id = parse_id("clinic", clinic_id)?;
        let service = required("service", &request.service).map_err(ClinicError::Validation)?;
        let time_slot = required("timeSlot", &request.time_slot).map_err(ClinicError::Validation)?;
        let date = parse_visit_date(&request.date)?;
        if request.amount <= 0 {
            return Err(ClinicError::Validation("amount must be greater than 0".to_string()));
        }

        let clinic = self
            .clinics
            .find_clinic(&clinic_id)
            .await?
            .ok_or(ClinicError::ClinicNotFound)?;
        if !clinic.offers(service) {
            return Err(ClinicError::ServiceNotOffered(service.to_string()));
        }

        let now = Utc::now();
        let booking = self
            .clinics
            .create_booking(ClinicBooking {
                id: new_id(),
                user_id: user_id.to_string(),
                clinic_id,
                service: service.to_string(),
                date,
                time_slot: time_slot.to_string(),
                amount: request.amount,
                payment_id: None,
                payment_status: VisitPaymentStatus::Pending,
                status: VisitStatus::Pending,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!("Created clinic booking {} at {}", booking.id, clinic.name);
        Ok(booking)
    }

    pub async fn my_bookings(&self, user_id: &str) -> Result<Vec<ClinicBooking>, ClinicError> {
        Ok(self.clinics.bookings_by_user(user_id).await?)
    }

    #[instrument(skip(self, request), fields(booking_id = %request.booking_id))]
    pub async fn verify_payment(
        &self,
        user_id: &str,
        request: VisitPaymentRequest,
    ) -> Result<ClinicBooking, ClinicError> {
        let booking_id = required("bookingId", &request.booking_id).map_err(ClinicError::Validation)?;
        let payment_id = required("paymentId", &request.payment_id).map_err(ClinicError::Validation)?;
        let booking_id = parse_id("booking", booking_id)?;

        let mut booking = self
            .clinics
            .find_booking(&booking_id)
            .await?
            .filter(|b| b.user_id == user_id)
            .ok_or(ClinicError::BookingNotFound)?;

        booking.payment_id = Some(payment_id.to_string());
        booking.payment_status = VisitPaymentStatus::Completed;
        booking.status = VisitStatus::Confirmed;
        booking.updated_at = Utc::now();
        self.clinics.update_booking(&booking).await?;

        info!("Clinic booking {} paid with {}", booking.id, payment_id);
        Ok(booking)
    }
}
