use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use shared_database::{DatabaseError, MongoDatabase};

use super::{
    PeriodRepository, PregnancyRepository, SymptomsRepository, WeightRepository,
    PERIOD_CYCLES_COLLECTION, PREGNANCY_TRACKERS_COLLECTION, SYMPTOMS_COLLECTION,
    WEIGHT_COLLECTION,
};
use crate::models::{PeriodCycle, PregnancyTracker, SymptomsTracking, WeightEntry};

pub struct MongoPeriodRepository {
    collection: Collection<PeriodCycle>,
}

impl MongoPeriodRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(PERIOD_CYCLES_COLLECTION),
        }
    }
}

#[async_trait]
impl PeriodRepository for MongoPeriodRepository {
    async fn create(&self, cycle: PeriodCycle) -> Result<PeriodCycle, DatabaseError> {
        self.collection.insert_one(&cycle).await?;
        Ok(cycle)
    }

    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<PeriodCycle>, DatabaseError> {
        let cursor = self
            .collection
            .find(doc! { "userId": user_id })
            .sort(doc! { "startDate": -1, "_id": -1 })
            .limit(limit as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn delete_by_user(&self, user_id: &str) -> Result<u64, DatabaseError> {
        let result = self.collection.delete_many(doc! { "userId": user_id }).await?;
        Ok(result.deleted_count)
    }
}

pub struct MongoPregnancyRepository {
    collection: Collection<PregnancyTracker>,
}

impl MongoPregnancyRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(PREGNANCY_TRACKERS_COLLECTION),
        }
    }
}

#[async_trait]
impl PregnancyRepository for MongoPregnancyRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<PregnancyTracker>, DatabaseError> {
        Ok(self.collection.find_one(doc! { "userId": user_id }).await?)
    }

    async fn create(&self, tracker: PregnancyTracker) -> Result<PregnancyTracker, DatabaseError> {
        self.collection.insert_one(&tracker).await?;
        Ok(tracker)
    }

    async fn update(&self, tracker: &PregnancyTracker) -> Result<(), DatabaseError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": tracker.id.as_str() }, tracker)
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("pregnancy tracker".to_string()));
        }
        Ok(())
    }
}

pub struct MongoSymptomsRepository {
    collection: Collection<SymptomsTracking>,
}

impl MongoSymptomsRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(SYMPTOMS_COLLECTION),
        }
    }
}

#[async_trait]
impl SymptomsRepository for MongoSymptomsRepository {
    async fn create(&self, entry: SymptomsTracking) -> Result<SymptomsTracking, DatabaseError> {
        self.collection.insert_one(&entry).await?;
        Ok(entry)
    }

    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<SymptomsTracking>, DatabaseError> {
        let cursor = self
            .collection
            .find(doc! { "userId": user_id })
            .sort(doc! { "date": -1, "_id": -1 })
            .limit(limit as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

pub struct MongoWeightRepository {
    collection: Collection<WeightEntry>,
}

impl MongoWeightRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(WEIGHT_COLLECTION),
        }
    }
}

#[async_trait]
impl WeightRepository for MongoWeightRepository {
    async fn create(&self, entry: WeightEntry) -> Result<WeightEntry, DatabaseError> {
        self.collection.insert_one(&entry).await?;
        Ok(entry)
    }

    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<WeightEntry>, DatabaseError> {
        let cursor = self
            .collection
            .find(doc! { "userId": user_id })
            .sort(doc! { "date": -1, "_id": -1 })
            .limit(limit as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
