use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection,
};

use shared_database::{contains_pattern, DatabaseError, MongoDatabase};
use shared_models::time;

use super::{DoctorRepository, DOCTORS_COLLECTION};
use crate::models::{Doctor, DoctorFilter};

pub struct MongoDoctorRepository {
    collection: Collection<Doctor>,
}

impl MongoDoctorRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(DOCTORS_COLLECTION),
        }
    }
}

fn listed_filter(filter: &DoctorFilter) -> Document {
    let mut query = doc! { "isApproved": true, "isDeleted": { "$ne": true } };

    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = contains_pattern(search);
        query.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": pattern.as_str(), "$options": "i" } },
                doc! { "specialization": { "$regex": pattern.as_str(), "$options": "i" } },
            ],
        );
    }
    if let Some(specialization) = filter.specialization.as_deref() {
        query.insert("specialization", specialization);
    }

    query
}

#[async_trait]
impl DoctorRepository for MongoDoctorRepository {
    async fn create(&self, doctor: Doctor) -> Result<Doctor, DatabaseError> {
        self.collection.insert_one(&doctor).await?;
        Ok(doctor)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, DatabaseError> {
        Ok(self
            .collection
            .find_one(doc! { "_id": id, "isDeleted": { "$ne": true } })
            .await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, DatabaseError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email, "isDeleted": { "$ne": true } })
            .await?)
    }

    async fn update(&self, doctor: &Doctor) -> Result<(), DatabaseError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": doctor.id.as_str() }, doctor)
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("doctor".to_string()));
        }
        Ok(())
    }

    async fn soft_delete(&self, id: &str) -> Result<(), DatabaseError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "isDeleted": true, "updatedAt": time::format(&Utc::now()) } },
            )
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("doctor".to_string()));
        }
        Ok(())
    }

    async fn find_listed(
        &self,
        filter: &DoctorFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Doctor>, DatabaseError> {
        let cursor = self
            .collection
            .find(listed_filter(filter))
            .sort(doc! { "name": 1, "_id": 1 })
            .skip(offset)
            .limit(limit as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count_listed(&self, filter: &DoctorFilter) -> Result<u64, DatabaseError> {
        Ok(self.collection.count_documents(listed_filter(filter)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_filter_escapes_search_text() {
        let filter = DoctorFilter {
            search: Some("dr. (ob)".to_string()),
            specialization: Some("Gynecologist".to_string()),
        };
        let query = listed_filter(&filter);
        assert!(query.get_bool("isApproved").unwrap());
        assert_eq!(query.get_str("specialization").unwrap(), "Gynecologist");

        let branches = query.get_array("$or").unwrap();
        let name = branches[0].as_document().unwrap().get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"dr\. \(ob\)");
    }

    #[test]
    fn blank_search_adds_no_clause() {
        let filter = DoctorFilter {
            search: Some("   ".to_string()),
            specialization: None,
        };
        assert!(listed_filter(&filter).get("$or").is_none());
    }
}
