use std::sync::Arc;

use async_trait::async_trait;

use shared_database::{DatabaseError, Storage};

use crate::models::{Clinic, ClinicBooking, Diagnostic, DiagnosticBooking};

mod memory;
mod mongo;

pub use memory::{InMemoryClinicRepository, InMemoryDiagnosticRepository};
pub use mongo::{MongoClinicRepository, MongoDiagnosticRepository};

pub const CLINICS_COLLECTION: &str = "clinics";
pub const CLINIC_BOOKINGS_COLLECTION: &str = "clinic_bookings";
pub const DIAGNOSTICS_COLLECTION: &str = "diagnostics";
pub const DIAGNOSTIC_BOOKINGS_COLLECTION: &str = "diagnostic_bookings";

/// Clinics and their visit bookings.
#[async_trait]
pub trait ClinicRepository: Send + Sync + 'static {
    async fn create_clinic(&self, clinic: Clinic) -> Result<Clinic, DatabaseError>;
    /// Ordered by name.
    async fn clinics(&self) -> Result<Vec<Clinic>, DatabaseError>;
    async fn find_clinic(&self, id: &str) -> Result<Option<Clinic>, DatabaseError>;
    async fn find_clinic_by_name(&self, name: &str) -> Result<Option<Clinic>, DatabaseError>;

    async fn create_booking(&self, booking: ClinicBooking) -> Result<ClinicBooking, DatabaseError>;
    async fn find_booking(&self, id: &str) -> Result<Option<ClinicBooking>, DatabaseError>;
    /// Newest first.
    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<ClinicBooking>, DatabaseError>;
    async fn update_booking(&self, booking: &ClinicBooking) -> Result<(), DatabaseError>;
}

/// Diagnostic packages and their bookings.
#[async_trait]
pub trait DiagnosticRepository: Send + Sync + 'static {
    async fn create_diagnostic(&self, diagnostic: Diagnostic) -> Result<Diagnostic, DatabaseError>;
    /// Ordered by name.
    async fn diagnostics(&self) -> Result<Vec<Diagnostic>, DatabaseError>;
    async fn find_diagnostic(&self, id: &str) -> Result<Option<Diagnostic>, DatabaseError>;
    async fn find_diagnostic_by_name(&self, name: &str) -> Result<Option<Diagnostic>, DatabaseError>;

    async fn create_booking(
        &self,
        booking: DiagnosticBooking,
    ) -> Result<DiagnosticBooking, DatabaseError>;
    async fn find_booking(&self, id: &str) -> Result<Option<DiagnosticBooking>, DatabaseError>;
    /// Newest first.
    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<DiagnosticBooking>, DatabaseError>;
    async fn update_booking(&self, booking: &DiagnosticBooking) -> Result<(), DatabaseError>;
}

pub fn clinic_repository(storage: &Storage) -> Arc<dyn ClinicRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoClinicRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryClinicRepository::new()),
    }
}

pub fn diagnostic_repository(storage: &Storage) -> Arc<dyn DiagnosticRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoDiagnosticRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryDiagnosticRepository::new()),
    }
}
