use std::sync::Arc;

use async_trait::async_trait;

use shared_database::{DatabaseError, Storage};

use crate::models::{OtpRecord, UserAccount};

mod memory;
mod mongo;

pub use memory::{InMemoryOtpRepository, InMemoryUserRepository};
pub use mongo::{MongoOtpRepository, MongoUserRepository};

pub const USERS_COLLECTION: &str = "users";
pub const OTPS_COLLECTION: &str = "otps";

/// Account storage. Lookups only return active accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn create(&self, user: UserAccount) -> Result<UserAccount, DatabaseError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<UserAccount>, DatabaseError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DatabaseError>;
    async fn update(&self, user: &UserAccount) -> Result<(), DatabaseError>;
    async fn deactivate(&self, id: &str) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait OtpRepository: Send + Sync + 'static {
    async fn save(&self, otp: OtpRecord) -> Result<(), DatabaseError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<OtpRecord>, DatabaseError>;
    async fn delete_by_email(&self, email: &str) -> Result<u64, DatabaseError>;
}

pub fn user_repository(storage: &Storage) -> Arc<dyn UserRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoUserRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryUserRepository::new()),
    }
}

pub fn otp_repository(storage: &Storage) -> Arc<dyn OtpRepository> {
    match storage {
        Storage::Mongo(db) => Arc::new(MongoOtpRepository::new(db)),
        Storage::Memory => Arc::new(InMemoryOtpRepository::new()),
    }
}
