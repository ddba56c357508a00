use std::sync::Arc;

use async_trait::async_trait;

use shared_database::{DatabaseError, Storage};

use crate::models::{PeriodCycle, PregnancyTracker, SymptomsTracking, WeightEntry};

mod memory;
mod mongo;

pub use memory::{
    InMemoryPeriodRepository, InMemoryPregnancyRepository, InMemorySymptomsRepository,
    InMemoryWeightRepository,
};
pub use mongo::{
    MongoPeriodRepository, MongoPregnancyRepository, MongoSymptomsRepository, MongoWeightRepository,
};

pub const PERIOD_CYCLES_COLLECTION: &str = "period_cycles";
pub const PREGNANCY_TRACKERS_COLLECTION: &str = "pregnancy_trackers";
pub const SYMPTOMS_COLLECTION: &str = "symptoms_tracking";
pub const WEIGHT_COLLECTION: &str = "weight_metabolic";

#[async_trait]
pub trait PeriodRepository: Send + Sync + 'static {
    async fn create(&self, cycle: PeriodCycle) -> Result<PeriodCycle, DatabaseError>;
    /// Most recent start date first.
    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<PeriodCycle>, DatabaseError>;
    async fn delete_by_user(&self, user_id: &str) -> Result<u64, DatabaseError>;
}

#[async_trait]
pub trait PregnancyRepository: Send + Sync + 'static {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<PregnancyTracker>, DatabaseError>;
    async fn create(&self, tracker: PregnancyTracker) -> Result<PregnancyTracker, DatabaseError>;
    async fn update(&self, tracker: &PregnancyTracker) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait SymptomsRepository: Send + Sync + 'static {
    async fn create(&self, entry: SymptomsTracking) -> Result<SymptomsTracking, DatabaseError>;
    /// Most recent date first.
    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<SymptomsTracking>, DatabaseError>;
}

#[async_trait]
pub trait WeightRepository: Send + Sync + 'static {
    async fn create(&self, entry: WeightEntry) -> Result<WeightEntry, DatabaseError>;
    /// Most recent date first.
    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<WeightEntry>, DatabaseError>;
}

pub fn period_repository(storage: &Storage) -> Arc<dyn PeriodRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoPeriodRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryPeriodRepository::new()),
    }
}

pub fn pregnancy_repository(storage: &Storage) -> Arc<dyn PregnancyRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoPregnancyRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryPregnancyRepository::new()),
    }
}

pub fn symptoms_repository(storage: &Storage) -> Arc<dyn SymptomsRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoSymptomsRepository::new(db)),
        Storage::Memory => Arc::new(InMemorySymptomsRepository::new()),
    }
}

pub fn weight_repository(storage: &Storage) -> Arc<dyn WeightRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoWeightRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryWeightRepository::new()),
    }
}
