use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use shared_database::{DatabaseError, MongoDatabase};

use super::{
    ClinicRepository, DiagnosticRepository, CLINICS_COLLECTION, CLINIC_BOOKINGS_COLLECTION,
    DIAGNOSTICS_COLLECTION, DIAGNOSTIC_BOOKINGS_COLLECTION,
};
use crate::models::{Clinic, ClinicBooking, Diagnostic, DiagnosticBooking};

pub struct MongoClinicRepository {
    clinics: Collection<Clinic>,
    bookings: Collection<ClinicBooking>,
}

impl MongoClinicRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            clinics: db.collection(CLINICS_COLLECTION),
            bookings: db.collection(CLINIC_BOOKINGS_COLLECTION),
        }
    }
}

#[async_trait]
impl ClinicRepository for MongoClinicRepository {
    async fn create_clinic(&self, clinic: Clinic) -> Result<Clinic, DatabaseError> {
        self.clinics.insert_one(&clinic).await?;
        Ok(clinic)
    }

    async fn clinics(&self) -> Result<Vec<Clinic>, DatabaseError> {
        let cursor = self.clinics.find(doc! {}).sort(doc! { "name": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_clinic(&self, id: &str) -> Result<Option<Clinic>, DatabaseError> {
        Ok(self.clinics.find_one(doc! { "_id": id }).await?)
    }

    async fn find_clinic_by_name(&self, name: &str) -> Result<Option<Clinic>, DatabaseError> {
        Ok(self.clinics.find_one(doc! { "name": name }).await?)
    }

    async fn create_booking(&self, booking: ClinicBooking) -> Result<ClinicBooking, DatabaseError> {
        self.bookings.insert_one(&booking).await?;
        Ok(booking)
    }

    async fn find_booking(&self, id: &str) -> Result<Option<ClinicBooking>, DatabaseError> {
        Ok(self.bookings.find_one(doc! { "_id": id }).await?)
    }

    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<ClinicBooking>, DatabaseError> {
        let cursor = self
            .bookings
            .find(doc! { "userId": user_id })
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_booking(&self, booking: &ClinicBooking) -> Result<(), DatabaseError> {
        let result = self
            .bookings
            .replace_one(doc! { "_id": booking.id.as_str() }, booking)
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("clinic booking".to_string()));
        }
        Ok(())
    }
}

pub struct MongoDiagnosticRepository {
    diagnostics: Collection<Diagnostic>,
    bookings: Collection<DiagnosticBooking>,
}

impl MongoDiagnosticRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            diagnostics: db.collection(DIAGNOSTICS_COLLECTION),
            bookings: db.collection(DIAGNOSTIC_BOOKINGS_COLLECTION),
        }
    }
}

#[async_trait]
impl DiagnosticRepository for MongoDiagnosticRepository {
    async fn create_diagnostic(&self, diagnostic: Diagnostic) -> Result<Diagnostic, DatabaseError> {
        self.diagnostics.insert_one(&diagnostic).await?;
        Ok(diagnostic)
    }

    async fn diagnostics(&self) -> Result<Vec<Diagnostic>, DatabaseError> {
        let cursor = self.diagnostics.find(doc! {}).sort(doc! { "name": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_diagnostic(&self, id: &str) -> Result<Option<Diagnostic>, DatabaseError> {
        Ok(self.diagnostics.find_one(doc! { "_id": id }).await?)
    }

    async fn find_diagnostic_by_name(&self, name: &str) -> Result<Option<Diagnostic>, DatabaseError> {
        Ok(self.diagnostics.find_one(doc! { "name": name }).await?)
    }

    async fn create_booking(
        &self,
        booking: DiagnosticBooking,
    ) -> Result<DiagnosticBooking, DatabaseError> {
        self.bookings.insert_one(&booking).await?;
        Ok(booking)
    }

    async fn find_booking(&self, id: &str) -> Result<Option<DiagnosticBooking>, DatabaseError> {
        Ok(self.bookings.find_one(doc! { "_id": id }).await?)
    }

    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<DiagnosticBooking>, DatabaseError> {
        let cursor = self
            .bookings
            .find(doc! { "userId": user_id })
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_booking(&self, booking: &DiagnosticBooking) -> Result<(), DatabaseError> {
        let result = self
            .bookings
            .replace_one(doc! { "_id": booking.id.as_str() }, booking)
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("diagnostic booking".to_string()));
        }
        Ok(())
    }
}
