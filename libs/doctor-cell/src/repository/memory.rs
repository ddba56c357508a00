use async_trait::async_trait;
use chrono::Utc;

use shared_database::memory::paginate;
use shared_database::{contains_ignore_case, DatabaseError, MemoryCollection};

use super::DoctorRepository;
use crate::models::{Doctor, DoctorFilter};

#[derive(Clone, Default)]
pub struct InMemoryDoctorRepository {
    doctors: MemoryCollection<Doctor>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn listed(&self, filter: &DoctorFilter) -> Vec<Doctor> {
        let search = filter.search.as_deref().filter(|s| !s.trim().is_empty());
        let mut doctors = self.doctors.find(|d| {
            d.is_approved
                && !d.is_deleted
                && search.map_or(true, |s| {
                    contains_ignore_case(&d.name, s) || contains_ignore_case(&d.specialization, s)
                })
                && filter
                    .specialization
                    .as_deref()
                    .map_or(true, |spec| d.specialization == spec)
        });
        doctors.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        doctors
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DatabaseError> {
        Ok(self.doctors.insert(doctor))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, DatabaseError> {
        Ok(self.doctors.get(id).filter(|d| !d.is_deleted))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, DatabaseError> {
        Ok(self.doctors.find_one(|d| !d.is_deleted && d.email == email))
    }

    async fn update(&self, doctor: &Doctor) -> Result<(), DatabaseError> {
        if self.doctors.replace(doctor.clone()) {
            Ok(())
        } else {
            Err(DatabaseError::NotFound("doctor".to_string()))
        }
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DatabaseError> {
        self.doctors
            .update(id, |d| {
                d.is_deleted = true;
                d.updated_at = Utc::now();
            })
            .map(|_| ())
            .ok_or_else(|| DatabaseError::NotFound("doctor".to_string()))
    }

    async fn find_listed(
        &self,
        filter: &DoctorFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Doctor>, DatabaseError> {
        Ok(paginate(self.listed(filter), offset, limit))
    }

    async fn count_listed(&self, filter: &DoctorFilter) -> Result<u64, DatabaseError> {
        Ok(self.listed(filter).len() as u64)
    }
}
