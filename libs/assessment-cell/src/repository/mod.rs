use std::sync::Arc;

use async_trait::async_trait;

use shared_database::{DatabaseError, Storage};

use crate::models::{PcosAssessment, TestResult};

mod memory;
mod mongo;

pub use memory::{InMemoryPcosRepository, InMemoryResultRepository};
pub use mongo::{MongoPcosRepository, MongoResultRepository};

pub const PCOS_COLLECTION: &str = "pcos_assessments";
/// Shared by the mental-health tests and FSFI.
pub const RESULTS_COLLECTION: &str = "mental_health_results";

#[async_trait]
pub trait PcosRepository: Send + Sync + 'static {
    async fn create(&self, assessment: PcosAssessment) -> Result<PcosAssessment, DatabaseError>;
    /// Newest first.
    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<PcosAssessment>, DatabaseError>;
}

#[async_trait]
pub trait ResultRepository: Send + Sync + 'static {
    async fn create(&self, result: TestResult) -> Result<TestResult, DatabaseError>;
    /// Newest first, optionally restricted to one test.
    async fn find_by_user(
        &self,
        user_id: &str,
        test_name: Option<&str>,
    ) -> Result<Vec<TestResult>, DatabaseError>;
}

pub fn pcos_repository(storage: &Storage) -> Arc<dyn PcosRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoPcosRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryPcosRepository::new()),
    }
}

pub fn result_repository(storage: &Storage) -> Arc<dyn ResultRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoResultRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryResultRepository::new()),
    }
}
