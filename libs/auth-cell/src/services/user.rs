use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use shared_utils::validation::non_blank;

use crate::models::{AuthError, UpdateProfileRequest, UserProfile};
use crate::repository::UserRepository;

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile, AuthError> {
        debug!("Fetching profile for user {}", user_id);
        self.users
            .find_by_id(user_id)
            .await?
            .map(|user| user.profile())
            .ok_or(AuthError::UserNotFound)
    }

    /// Only non-blank fields overwrite the stored values.
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: UpdateProfileRequest,
    ) -> Result<UserProfile, AuthError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(name) = non_blank(request.name.as_deref()) {
            user.name = name;
        }
        if let Some(phone) = non_blank(request.phone_number.as_deref()) {
            user.phone_number = phone;
        }
        if let Some(image) = non_blank(request.profile_image.as_deref()) {
            user.profile_image = Some(image);
        }
        user.updated_at = Utc::now();

        self.users.update(&user).await?;
        Ok(user.profile())
    }

    pub async fn deactivate(&self, user_id: &str) -> Result<(), AuthError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AuthError::UserNotFound);
        }
        self.users.deactivate(user_id).await?;
        info!("Deactivated user {}", user_id);
        Ok(())
    }
}
