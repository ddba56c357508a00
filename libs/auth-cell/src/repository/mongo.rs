use async_trait::async_trait;
use chrono::Utc;
use mongodb::{bson::doc, Collection};

use shared_database::{DatabaseError, MongoDatabase};
use shared_models::time;

use super::{OtpRepository, UserRepository, OTPS_COLLECTION, USERS_COLLECTION};
use crate::models::{OtpRecord, UserAccount};

pub struct MongoUserRepository {
    collection: Collection<UserAccount>,
}

impl MongoUserRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: UserAccount) -> Result<UserAccount, DatabaseError> {
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserAccount>, DatabaseError> {
        Ok(self
            .collection
            .find_one(doc! { "_id": id, "isActive": true })
            .await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DatabaseError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email, "isActive": true })
            .await?)
    }

    async fn update(&self, user: &UserAccount) -> Result<(), DatabaseError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": user.id.as_str() }, user)
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("user".to_string()));
        }
        Ok(())
    }

    async fn deactivate(&self, id: &str) -> Result<(), DatabaseError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "isActive": false, "updatedAt": time::format(&Utc::now()) } },
            )
            .await?;
        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("user".to_string()));
        }
        Ok(())
    }
}

pub struct MongoOtpRepository {
    collection: Collection<OtpRecord>,
}

impl MongoOtpRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(OTPS_COLLECTION),
        }
    }
}

#[async_trait]
impl OtpRepository for MongoOtpRepository {
    async fn save(&self, otp: OtpRecord) -> Result<(), DatabaseError> {
        self.collection.insert_one(&otp).await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<OtpRecord>, DatabaseError> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DatabaseError> {
        let result = self.collection.delete_many(doc! { "email": email }).await?;
        Ok(result.deleted_count)
    }
}
