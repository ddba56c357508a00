use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use shared_database::{DatabaseError, Storage};

use crate::models::{Booking, BookingStatus};

mod memory;
mod mongo;

pub use memory::InMemoryBookingRepository;
pub use mongo::MongoBookingRepository;

pub const BOOKINGS_COLLECTION: &str = "bookings";

#[async_trait]
pub trait BookingRepository: Send + Sync + 'static {
    async fn create(&self, booking: Booking) -> Result<Booking, DatabaseError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, DatabaseError>;
    async fn update(&self, booking: &Booking) -> Result<(), DatabaseError>;

    /// Newest first.
    async fn find_by_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Booking>, DatabaseError>;

    async fn count_by_user(&self, user_id: &str) -> Result<u64, DatabaseError>;

    /// Newest first.
    async fn find_by_user_with_status(
        &self,
        user_id: &str,
        statuses: &[BookingStatus],
    ) -> Result<Vec<Booking>, DatabaseError>;

    /// Bookings that still hold a slot with the doctor on `date`.
    async fn find_by_doctor_on(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, DatabaseError>;
}

pub fn booking_repository(storage: &Storage) -> Arc<dyn BookingRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoBookingRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryBookingRepository::new()),
    }
}
