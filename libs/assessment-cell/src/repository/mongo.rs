use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use shared_database::{DatabaseError, MongoDatabase};

use super::{PcosRepository, ResultRepository, PCOS_COLLECTION, RESULTS_COLLECTION};
use crate::models::{PcosAssessment, TestResult};

pub struct MongoPcosRepository {
    collection: Collection<PcosAssessment>,
}

impl MongoPcosRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(PCOS_COLLECTION),
        }
    }
}

#[async_trait]
impl PcosRepository for MongoPcosRepository {
    async fn create(&self, assessment: PcosAssessment) -> Result<PcosAssessment, DatabaseError> {
        self.collection.insert_one(&assessment).await?;
        Ok(assessment)
    }

    async fn latest(&self, user_id: &str, limit: u64) -> Result<Vec<PcosAssessment>, DatabaseError> {
        let cursor = self
            .collection
            .find(doc! { "userId": user_id })
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .limit(limit as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

pub struct MongoResultRepository {
    collection: Collection<TestResult>,
}

impl MongoResultRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(RESULTS_COLLECTION),
        }
    }
}

#[async_trait]
impl ResultRepository for MongoResultRepository {
    async fn create(&self, result: TestResult) -> Result<TestResult, DatabaseError> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        test_name: Option<&str>,
    ) -> Result<Vec<TestResult>, DatabaseError> {
        let mut filter = doc! { "userId": user_id };
        if let Some(test_name) = test_name {
            filter.insert("testName", test_name);
        }
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "testDate": -1, "_id": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
