use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection,
};

use shared_database::{contains_pattern, DatabaseError, MongoDatabase};
use shared_models::time;

use super::{JournalRepository, JOURNALS_COLLECTION};
use crate::models::{Journal, JournalFilter};

pub struct MongoJournalRepository {
    collection: Collection<Journal>,
}

impl MongoJournalRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(JOURNALS_COLLECTION),
        }
    }
}

fn journal_filter(filter: &JournalFilter) -> Document {
    let mut query = doc! { "userId": filter.user_id.as_str() };

    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = contains_pattern(search);
        query.insert(
            "$or",
            vec![
                doc! { "title": { "$regex": pattern.as_str(), "$options": "i" } },
                doc! { "content": { "$regex": pattern.as_str(), "$options": "i" } },
            ],
        );
    }
    if let Some(category) = filter.category.as_deref() {
        query.insert("category", category);
    }
    if let Some((start, end)) = &filter.created {
        query.insert(
            "createdAt",
            doc! { "$gte": time::format(start), "$lt": time::format(end) },
        );
    }
    query
}

#[async_trait]
impl JournalRepository for MongoJournalRepository {
    async fn create(&self, journal: Journal) -> Result<Journal, DatabaseError> {
        self.collection.insert_one(&journal).await?;
        Ok(journal)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Journal>, DatabaseError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find(
        &self,
        filter: &JournalFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Journal>, DatabaseError> {
        let cursor = self
            .collection
            .find(journal_filter(filter))
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .skip(offset)
            .limit(limit as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: &JournalFilter) -> Result<u64, DatabaseError> {
        Ok(self.collection.count_documents(journal_filter(filter)).await?)
    }

    async fn update(&self, journal: &Journal) -> Result<(), DatabaseError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": journal.id.as_str() }, journal)
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("journal".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(DatabaseError::NotFound("journal".to_string()));
        }
        Ok(())
    }
}
