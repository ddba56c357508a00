use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};

use doctor_cell::models::{DoctorSummary, SessionType};
use doctor_cell::repository::DoctorRepository;
use payment_cell::{PaymentError, PaymentGateway};
use shared_database::ids::{new_id, parse_id};
use shared_models::pagination::Pagination;
use shared_utils::validation::{non_blank, required};

use crate::models::{
    Booking, BookingCreated, BookingError, BookingStatus, BookingWithDoctor, CreateBookingRequest,
    PaymentStatus, VerifyPaymentRequest,
};
use crate::repository::BookingRepository;
use crate::services::slots;

pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    doctors: Arc<dyn DoctorRepository>,
    payments: Arc<dyn PaymentGateway>,
    currency: String,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| BookingError::InvalidDate)
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        doctors: Arc<dyn DoctorRepository>,
        payments: Arc<dyn PaymentGateway>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            bookings,
            doctors,
            payments,
            currency: currency.into(),
        }
    }

    #[instrument(skip(self, request), fields(doctor_id = %request.doctor_id))]
    pub async fn create_booking(
        &self,
        user_id: &str,
        request: CreateBookingRequest,
    ) -> Result<BookingCreated, BookingError> {
        let user_id = parse_id("user", user_id)?;
        let doctor_id = required("doctorId", &request.doctor_id).map_err(BookingError::Validation)?;
        let doctor_id = parse_id("doctor", doctor_id)?;
        let time_slot = required("timeSlot", &request.time_slot).map_err(BookingError::Validation)?;
        let date = parse_date(&request.date)?;
        let session_type =
            SessionType::parse(&request.session_type).ok_or(BookingError::InvalidSessionType)?;

        let now = Utc::now();
        let start = slots::slot_start(time_slot);
        let in_past = match start {
            Some(start) => date.and_time(start).and_utc() < now,
            None => date < now.date_naive(),
        };
        if in_past {
            return Err(BookingError::PastDate);
        }

        let doctor = self
            .doctors
            .find_by_id(&doctor_id)
            .await?
            .ok_or(BookingError::DoctorNotFound)?;
        if !doctor.is_available {
            return Err(BookingError::DoctorUnavailable);
        }
        let amount = doctor
            .fee_for(session_type)
            .ok_or(BookingError::SessionNotOffered(session_type))?;

        let taken = self
            .bookings
            .find_by_doctor_on(&doctor_id, date)
            .await?
            .iter()
            .any(|b| slots::same_slot(&b.time_slot, time_slot));
        if taken {
            debug!("Slot {} on {} already taken", time_slot, date);
            return Err(BookingError::SlotTaken);
        }

        let booking_id = new_id();
        let order_id = self
            .payments
            .create_order(amount * 100, &self.currency, &format!("order_{}", booking_id))
            .await?;

        let booking = Booking {
            id: booking_id,
            user_id,
            doctor_id,
            session_type,
            date,
            time_slot: time_slot.to_string(),
            status: BookingStatus::Pending,
            amount,
            razorpay_order_id: Some(order_id.clone()),
            razorpay_payment_id: None,
            payment_status: PaymentStatus::Pending,
            notes: non_blank(request.notes.as_deref()),
            created_at: now,
            updated_at: now,
        };
        let booking = self.bookings.create(booking).await?;
        info!("Created booking {} with order {}", booking.id, order_id);

        Ok(BookingCreated {
            booking_id: booking.id,
            razorpay_order_id: order_id,
            amount,
            status: booking.status,
        })
    }

    #[instrument(skip(self, request), fields(booking_id = %request.booking_id))]
    pub async fn verify_payment(
        &self,
        user_id: &str,
        request: VerifyPaymentRequest,
    ) -> Result<Booking, BookingError> {
        for (field, value) in [
            ("bookingId", &request.booking_id),
            ("razorpayOrderId", &request.razorpay_order_id),
            ("razorpayPaymentId", &request.razorpay_payment_id),
            ("razorpaySignature", &request.razorpay_signature),
        ] {
            required(field, value).map_err(BookingError::Validation)?;
        }
        let booking_id = parse_id("booking", &request.booking_id)?;

        let mut booking = self
            .bookings
            .find_by_id(&booking_id)
            .await?
            .filter(|b| b.user_id == user_id)
            .ok_or(BookingError::NotFound)?;
        if booking.payment_status == PaymentStatus::Paid {
            return Err(BookingError::AlreadyPaid);
        }

        let order_id = request.razorpay_order_id.trim();
        if booking.razorpay_order_id.as_deref() != Some(order_id) {
            return Err(BookingError::OrderMismatch);
        }

        let payment_id = request.razorpay_payment_id.trim();
        let verified = self
            .payments
            .verify_signature(order_id, payment_id, &request.razorpay_signature);
        booking.updated_at = Utc::now();

        match verified {
            Ok(()) => {
                booking.payment_status = PaymentStatus::Paid;
                booking.status = BookingStatus::Confirmed;
                booking.razorpay_payment_id = Some(payment_id.to_string());
                self.bookings.update(&booking).await?;
                info!("Payment {} confirmed booking {}", payment_id, booking.id);
                Ok(booking)
            }
            Err(PaymentError::InvalidSignature) => {
                warn!("Invalid payment signature for booking {}", booking.id);
                booking.payment_status = PaymentStatus::Failed;
                self.bookings.update(&booking).await?;
                Err(BookingError::InvalidSignature)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// One page of the user's bookings with doctor summaries, plus the total count.
    pub async fn user_bookings(
        &self,
        user_id: &str,
        pagination: Pagination,
    ) -> Result<(Vec<BookingWithDoctor>, u64), BookingError> {
        let total = self.bookings.count_by_user(user_id).await?;
        let bookings = self
            .bookings
            .find_by_user(user_id, pagination.offset(), pagination.limit)
            .await?;

        let mut doctors: HashMap<String, Option<DoctorSummary>> = HashMap::new();
        let mut page = Vec::with_capacity(bookings.len());
        for booking in bookings {
            if !doctors.contains_key(&booking.doctor_id) {
                let summary = match self.doctors.find_by_id(&booking.doctor_id).await {
                    Ok(doctor) => doctor.map(|d| d.summary()),
                    Err(e) => {
                        warn!("Doctor lookup failed for booking {}: {}", booking.id, e);
                        None
                    }
                };
                doctors.insert(booking.doctor_id.clone(), summary);
            }
            let doctor = doctors.get(&booking.doctor_id).cloned().flatten();
            page.push(BookingWithDoctor { booking, doctor });
        }

        Ok((page, total))
    }

    pub async fn active_bookings(&self, user_id: &str) -> Result<Vec<Booking>, BookingError> {
        Ok(self
            .bookings
            .find_by_user_with_status(user_id, &[BookingStatus::Pending, BookingStatus::Confirmed])
            .await?)
    }

    pub async fn doctor_bookings_on(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, BookingError> {
        let doctor_id = parse_id("doctor", doctor_id)?;
        Ok(self.bookings.find_by_doctor_on(&doctor_id, date).await?)
    }
}
