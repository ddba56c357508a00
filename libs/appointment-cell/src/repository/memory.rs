use async_trait::async_trait;
use chrono::NaiveDate;

use shared_database::memory::paginate;
use shared_database::{DatabaseError, MemoryCollection};

use super::BookingRepository;
use crate::models::{Booking, BookingStatus};

#[derive(Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: MemoryCollection<Booking>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
        bookings.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
        });
        bookings
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DatabaseError> {
        Ok(self.bookings.insert(booking))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, DatabaseError> {
        Ok(self.bookings.get(id))
    }

    async fn update(&self, booking: &Booking) -> Result<(), DatabaseError> {
        if self.bookings.replace(booking.clone()) {
            Ok(())
        } else {
            Err(DatabaseError::NotFound("booking".to_string()))
        }
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Booking>, DatabaseError> {
        let bookings = Self::newest_first(self.bookings.find(|b| b.user_id == user_id));
        Ok(paginate(bookings, offset, limit))
    }

    async fn count_by_user(&self, user_id: &str) -> Result<u64, DatabaseError> {
        Ok(self.bookings.find(|b| b.user_id == user_id).len() as u64)
    }

    async fn find_by_user_with_status(
        &self,
        user_id: &str,
        statuses: &[BookingStatus],
    ) -> Result<Vec<Booking>, DatabaseError> {
        Ok(Self::newest_first(self.bookings.find(|b| {
            b.user_id == user_id && statuses.contains(&b.status)
        })))
    }

    async fn find_by_doctor_on(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, DatabaseError> {
        Ok(self
            .bookings
            .find(|b| b.doctor_id == doctor_id && b.date == date && b.status.holds_slot()))
    }
}
