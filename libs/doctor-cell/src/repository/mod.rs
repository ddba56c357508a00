use std::sync::Arc;

use async_trait::async_trait;

use shared_database::{DatabaseError, Storage};

use crate::models::{Doctor, DoctorFilter};

mod memory;
mod mongo;

pub use memory::InMemoryDoctorRepository;
pub use mongo::MongoDoctorRepository;

pub const DOCTORS_COLLECTION: &str = "doctors";

/// Doctor storage. Soft-deleted doctors are invisible to every lookup.
#[async_trait]
pub trait DoctorRepository: Send + Sync + 'static {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DatabaseError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, DatabaseError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, DatabaseError>;
    async fn update(&self, doctor: &Doctor) -> Result<(), DatabaseError>;
    async fn soft_delete(&self, id: &str) -> Result<(), DatabaseError>;

    /// Approved doctors matching `filter`, ordered by name.
    async fn find_listed(
        &self,
        filter: &DoctorFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Doctor>, DatabaseError>;

    async fn count_listed(&self, filter: &DoctorFilter) -> Result<u64, DatabaseError>;
}

pub fn doctor_repository(storage: &Storage) -> Arc<dyn DoctorRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoDoctorRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryDoctorRepository::new()),
    }
}
