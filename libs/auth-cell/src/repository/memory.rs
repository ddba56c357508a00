use async_trait::async_trait;
use chrono::Utc;

use shared_database::{DatabaseError, MemoryCollection};

use super::{OtpRepository, UserRepository};
use crate::models::{OtpRecord, UserAccount};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: MemoryCollection<UserAccount>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: UserAccount) -> Result<UserAccount, DatabaseError> {
        Ok(self.users.insert(user))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserAccount>, DatabaseError> {
        Ok(self.users.get(id).filter(|u| u.is_active))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DatabaseError> {
        Ok(self.users.find_one(|u| u.is_active && u.email == email))
    }

    async fn update(&self, user: &UserAccount) -> Result<(), DatabaseError> {
        if self.users.replace(user.clone()) {
            Ok(())
        } else {
            Err(DatabaseError::NotFound("user".to_string()))
        }
    }

    async fn deactivate(&self, id: &str) -> Result<(), DatabaseError> {
        self.users
            .update(id, |u| {
                u.is_active = false;
                u.updated_at = Utc::now();
            })
            .map(|_| ())
            .ok_or_else(|| DatabaseError::NotFound("user".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOtpRepository {
    otps: MemoryCollection<OtpRecord>,
}

impl InMemoryOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepository {
    async fn save(&self, otp: OtpRecord) -> Result<(), DatabaseError> {
        self.otps.insert(otp);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<OtpRecord>, DatabaseError> {
        Ok(self.otps.find_one(|o| o.email == email))
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DatabaseError> {
        Ok(self.otps.remove_where(|o| o.email == email))
    }
}
