use async_trait::async_trait;

use shared_database::{DatabaseError, MemoryCollection};

use super::{ClinicRepository, DiagnosticRepository};
use crate::models::{Clinic, ClinicBooking, Diagnostic, DiagnosticBooking};

#[derive(Clone, Default)]
pub struct InMemoryClinicRepository {
    clinics: MemoryCollection<Clinic>,
    bookings: MemoryCollection<ClinicBooking>,
}

impl InMemoryClinicRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClinicRepository for InMemoryClinicRepository {
    async fn create_clinic(&self, clinic: Clinic) -> Result<Clinic, DatabaseError> {
        Ok(self.clinics.insert(clinic))
    }

    async fn clinics(&self) -> Result<Vec<Clinic>, DatabaseError> {
        let mut clinics = self.clinics.find(|_| true);
        clinics.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clinics)
    }

    async fn find_clinic(&self, id: &str) -> Result<Option<Clinic>, DatabaseError> {
        Ok(self.clinics.get(id))
    }

    async fn find_clinic_by_name(&self, name: &str) -> Result<Option<Clinic>, DatabaseError> {
        Ok(self.clinics.find_one(|c| c.name == name))
    }

    async fn create_booking(&self, booking: ClinicBooking) -> Result<ClinicBooking, DatabaseError> {
        Ok(self.bookings.insert(booking))
    }

    async fn find_booking(&self, id: &str) -> Result<Option<ClinicBooking>, DatabaseError> {
        Ok(self.bookings.get(id))
    }

    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<ClinicBooking>, DatabaseError> {
        let mut bookings = self.bookings.find(|b| b.user_id == user_id);
        bookings.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
        });
        Ok(bookings)
    }

    async fn update_booking(&self, booking: &ClinicBooking) -> Result<(), DatabaseError> {
        if !self.bookings.replace(booking.clone()) {
            return Err(DatabaseError::NotFound("clinic booking".to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDiagnosticRepository {
    diagnostics: MemoryCollection<Diagnostic>,
    bookings: MemoryCollection<DiagnosticBooking>,
}

impl InMemoryDiagnosticRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DiagnosticRepository for InMemoryDiagnosticRepository {
    async fn create_diagnostic(&self, diagnostic: Diagnostic) -> Result<Diagnostic, DatabaseError> {
        Ok(self.diagnostics.insert(diagnostic))
    }

    async fn diagnostics(&self) -> Result<Vec<Diagnostic>, DatabaseError> {
        let mut diagnostics = self.diagnostics.find(|_| true);
        diagnostics.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(diagnostics)
    }

    async fn find_diagnostic(&self, id: &str) -> Result<Option<Diagnostic>, DatabaseError> {
        Ok(self.diagnostics.get(id))
    }

    async fn find_diagnostic_by_name(&self, name: &str) -> Result<Option<Diagnostic>, DatabaseError> {
        Ok(self.diagnostics.find_one(|d| d.name == name))
    }

    async fn create_booking(
        &self,
        booking: DiagnosticBooking,
    ) -> Result<DiagnosticBooking, DatabaseError> {
        Ok(self.bookings.insert(booking))
    }

    async fn find_booking(&self, id: &str) -> Result<Option<DiagnosticBooking>, DatabaseError> {
        Ok(self.bookings.get(id))
    }

    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<DiagnosticBooking>, DatabaseError> {
        let mut bookings = self.bookings.find(|b| b.user_id == user_id);
        bookings.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
        });
        Ok(bookings)
    }

    async fn update_booking(&self, booking: &DiagnosticBooking) -> Result<(), DatabaseError> {
        if !self.bookings.replace(booking.clone()) {
            return Err(DatabaseError::NotFound("diagnostic booking".to_string()));
        }
        Ok(())
    }
}
