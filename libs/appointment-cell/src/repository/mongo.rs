use async_trait::async_trait;
use chrono::NaiveDate;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use shared_database::{DatabaseError, MongoDatabase};

use super::{BookingRepository, BOOKINGS_COLLECTION};
use crate::models::{Booking, BookingStatus};

pub struct MongoBookingRepository {
    collection: Collection<Booking>,
}

impl MongoBookingRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(BOOKINGS_COLLECTION),
        }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DatabaseError> {
        self.collection.insert_one(&booking).await?;
        Ok(booking)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, DatabaseError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn update(&self, booking: &Booking) -> Result<(), DatabaseError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": booking.id.as_str() }, booking)
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("booking".to_string()));
        }
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Booking>, DatabaseError> {
        let cursor = self
            .collection
            .find(doc! { "userId": user_id })
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .skip(offset)
            .limit(limit as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count_by_user(&self, user_id: &str) -> Result<u64, DatabaseError> {
        Ok(self
            .collection
            .count_documents(doc! { "userId": user_id })
            .await?)
    }

    async fn find_by_user_with_status(
        &self,
        user_id: &str,
        statuses: &[BookingStatus],
    ) -> Result<Vec<Booking>, DatabaseError> {
        let statuses: Vec<&str> = statuses.iter().map(BookingStatus::as_str).collect();
        let cursor = self
            .collection
            .find(doc! { "userId": user_id, "status": { "$in": statuses } })
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_doctor_on(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, DatabaseError> {
        let released = [BookingStatus::Cancelled.as_str(), BookingStatus::Rejected.as_str()];
        let cursor = self
            .collection
            .find(doc! {
                "doctorId": doctor_id,
                "date": date.format("%Y-%m-%d").to_string(),
                "status": { "$nin": released.to_vec() },
            })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
