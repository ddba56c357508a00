use std::sync::Arc;

use async_trait::async_trait;

use shared_database::{DatabaseError, Storage};

use crate::models::{Journal, JournalFilter};

mod memory;
mod mongo;

pub use memory::InMemoryJournalRepository;
pub use mongo::MongoJournalRepository;

pub const JOURNALS_COLLECTION: &str = "journals";

#[async_trait]
pub trait JournalRepository: Send + Sync + 'static {
    async fn create(&self, journal: Journal) -> Result<Journal, DatabaseError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Journal>, DatabaseError>;
    /// Newest first.
    async fn find(
        &self,
        filter: &JournalFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Journal>, DatabaseError>;
    async fn count(&self, filter: &JournalFilter) -> Result<u64, DatabaseError>;
    async fn update(&self, journal: &Journal) -> Result<(), DatabaseError>;
    async fn delete(&self, id: &str) -> Result<(), DatabaseError>;
}

pub fn journal_repository(storage: &Storage) -> Arc<dyn JournalRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoJournalRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryJournalRepository::new()),
    }
}
