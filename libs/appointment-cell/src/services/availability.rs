use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use doctor_cell::repository::DoctorRepository;
use shared_database::ids::parse_id;

use crate::models::{BookingError, SlotAvailability, TimeSlot};
use crate::repository::BookingRepository;
use crate::services::booking::parse_date;
use crate::services::slots;

pub struct AvailabilityService {
    doctors: Arc<dyn DoctorRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl AvailabilityService {
    pub fn new(doctors: Arc<dyn DoctorRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { doctors, bookings }
    }

    pub async fn time_slots(
        &self,
        doctor_id: &str,
        date: &str,
    ) -> Result<SlotAvailability, BookingError> {
        let doctor_id = parse_id("doctor", doctor_id)?;
        let date = parse_date(date)?;

        let doctor = self
            .doctors
            .find_by_id(&doctor_id)
            .await?
            .ok_or(BookingError::DoctorNotFound)?;
        if !doctor.is_available {
            return Ok(SlotAvailability {
                slots: Vec::new(),
                message: Some("Doctor is not available"),
            });
        }

        let booked: HashSet<_> = match self.bookings.find_by_doctor_on(&doctor_id, date).await {
            Ok(bookings) => bookings
                .iter()
                .filter_map(|b| slots::slot_start(&b.time_slot))
                .collect(),
            Err(e) => {
                warn!("Could not load bookings for doctor {} on {}: {}", doctor_id, date, e);
                HashSet::new()
            }
        };

        let (from, to) = slots::working_hours(doctor.timing.as_ref());
        let slots: Vec<TimeSlot> = slots::generate(from, to)
            .into_iter()
            .map(|start| TimeSlot {
                time: slots::format(start),
                available: !booked.contains(&start),
            })
            .collect();
        debug!("{} slots for doctor {} on {}, {} booked", slots.len(), doctor_id, date, booked.len());

        Ok(SlotAvailability {
            slots,
            message: None,
        })
    }
}
