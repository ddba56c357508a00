use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use shared_config::AppConfig;
use shared_database::ids::new_id;
use shared_utils::jwt::issue_token;
use shared_utils::validation::{is_valid_email, required, validate_password};

use crate::models::{
    AuthError, AuthResponse, ChangePasswordRequest, LoginRequest, OtpRecord, RegisterRequest,
    ResetPasswordRequest, UserAccount,
};
use crate::repository::{OtpRepository, UserRepository};
use crate::services::otp;
use crate::services::password::PasswordService;

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    otps: Arc<dyn OtpRepository>,
    config: Arc<AppConfig>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash(password: &str) -> Result<String, AuthError> {
    PasswordService::hash_password(password).map_err(|e| AuthError::Hashing(e.to_string()))
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        otps: Arc<dyn OtpRepository>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self { users, otps, config }
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AuthError> {
        let name = required("name", &request.name).map_err(AuthError::Validation)?;
        let phone = required("phoneNumber", &request.phone_number).map_err(AuthError::Validation)?;
        let email = normalize_email(&request.email);
        if !is_valid_email(&email) {
            return Err(AuthError::Validation("a valid email is required".to_string()));
        }
        validate_password(&request.password).map_err(AuthError::Validation)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::UserExists);
        }

        let now = Utc::now();
        let user = UserAccount {
            id: new_id(),
            name: name.to_string(),
            email,
            phone_number: phone.to_string(),
            password_hash: hash(&request.password)?,
            profile_image: None,
            is_verified: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let user = self.users.create(user).await?;
        info!("Registered user {}", user.id);

        self.auth_response(&user)
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let email = normalize_email(&request.email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = PasswordService::verify_password(&request.password, &user.password_hash)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        if !matches {
            debug!("Password mismatch for user {}", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        self.auth_response(&user)
    }

    /// Replaces any pending OTP for the email with a fresh one.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AuthError::Validation("email is required".to_string()));
        }
        if self.users.find_by_email(&email).await?.is_none() {
            return Err(AuthError::UserNotFound);
        }

        self.otps.delete_by_email(&email).await?;
        let record = otp::new_record(&email, Utc::now(), self.config.otp_ttl_minutes);
        // No mail transport is wired up; the code is only visible in debug logs.
        debug!("OTP for {}: {}", email, record.code);
        self.otps.save(record).await?;

        info!("Password reset OTP issued for {}", email);
        Ok(())
    }

    #[instrument(skip(self, code))]
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<(), AuthError> {
        self.check_otp(&normalize_email(email), code).await.map(|_| ())
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), AuthError> {
        let email = normalize_email(&request.email);
        self.check_otp(&email, &request.otp).await?;
        validate_password(&request.new_password).map_err(AuthError::Validation)?;

        let mut user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        user.password_hash = hash(&request.new_password)?;
        user.updated_at = Utc::now();
        self.users.update(&user).await?;

        self.otps.delete_by_email(&email).await?;
        info!("Password reset for user {}", user.id);
        Ok(())
    }

    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: &str,
        request: ChangePasswordRequest,
    ) -> Result<(), AuthError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let matches = PasswordService::verify_password(&request.current_password, &user.password_hash)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        if !matches {
            return Err(AuthError::InvalidCurrentPassword);
        }
        validate_password(&request.new_password).map_err(AuthError::Validation)?;

        user.password_hash = hash(&request.new_password)?;
        user.updated_at = Utc::now();
        self.users.update(&user).await?;

        info!("Password changed for user {}", user.id);
        Ok(())
    }

    async fn check_otp(&self, email: &str, code: &str) -> Result<OtpRecord, AuthError> {
        let record = self
            .otps
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidOtp)?;

        if record.is_expired(Utc::now()) {
            warn!("Expired OTP presented for {}", email);
            return Err(AuthError::OtpExpired);
        }
        if record.code != code.trim() {
            return Err(AuthError::InvalidOtp);
        }
        Ok(record)
    }

    fn auth_response(&self, user: &UserAccount) -> Result<AuthResponse, AuthError> {
        let token = issue_token(
            &user.id,
            Some(&user.email),
            &self.config.jwt_secret,
            self.config.jwt_expiry_hours,
        )
        .map_err(AuthError::Token)?;

        Ok(AuthResponse {
            token,
            user: user.profile(),
        })
    }
}
