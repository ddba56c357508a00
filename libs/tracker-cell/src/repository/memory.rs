use async_trait::async_trait;

use shared_database::memory::paginate;
use shared_database::{DatabaseError, MemoryCollection};

use super::{PeriodRepository, PregnancyRepository, SymptomsRepository, WeightRepository};
use crate::models::{PeriodCycle, PregnancyTracker, SymptomsTracking, WeightEntry};

#[derive(Clone, Default)]
pub struct InMemoryPeriodRepository {
    cycles: MemoryCollection<PeriodCycle>,
}

impl InMemoryPeriodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PeriodRepository for InMemoryPeriodRepository {
    async fn create(&self, cycle: PeriodCycle) -> Result<PeriodCycle, DatabaseError> {
        Ok(self.cycles.insert(cycle))
    }

    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<PeriodCycle>, DatabaseError> {
        let mut cycles = self.cycles.find(|c| c.user_id == user_id);
        cycles.sort_by(|a, b| {
            b.start_date.cmp(&a.start_date).then_with(|| b.id.cmp(&a.id))
        });
        Ok(paginate(cycles, 0, limit))
    }

    async fn delete_by_user(&self, user_id: &str) -> Result<u64, DatabaseError> {
        Ok(self.cycles.remove_where(|c| c.user_id == user_id))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPregnancyRepository {
    trackers: MemoryCollection<PregnancyTracker>,
}

impl InMemoryPregnancyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PregnancyRepository for InMemoryPregnancyRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<PregnancyTracker>, DatabaseError> {
        Ok(self.trackers.find_one(|t| t.user_id == user_id))
    }

    async fn create(&self, tracker: PregnancyTracker) -> Result<PregnancyTracker, DatabaseError> {
        Ok(self.trackers.insert(tracker))
    }

    async fn update(&self, tracker: &PregnancyTracker) -> Result<(), DatabaseError> {
        if !self.trackers.replace(tracker.clone()) {
            return Err(DatabaseError::NotFound("pregnancy tracker".to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySymptomsRepository {
    entries: MemoryCollection<SymptomsTracking>,
}

impl InMemorySymptomsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SymptomsRepository for InMemorySymptomsRepository {
    async fn create(&self, entry: SymptomsTracking) -> Result<SymptomsTracking, DatabaseError> {
        Ok(self.entries.insert(entry))
    }

    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<SymptomsTracking>, DatabaseError> {
        let mut entries = self.entries.find(|e| e.user_id == user_id);
        entries.sort_by(|a, b| {
            b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
        });
        Ok(paginate(entries, 0, limit))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryWeightRepository {
    entries: MemoryCollection<WeightEntry>,
}

impl InMemoryWeightRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WeightRepository for InMemoryWeightRepository {
    async fn create(&self, entry: WeightEntry) -> Result<WeightEntry, DatabaseError> {
        Ok(self.entries.insert(entry))
    }

    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<WeightEntry>, DatabaseError> {
        let mut entries = self.entries.find(|e| e.user_id == user_id);
        entries.sort_by(|a, b| {
            b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
        });
        Ok(paginate(entries, 0, limit))
    }
}
