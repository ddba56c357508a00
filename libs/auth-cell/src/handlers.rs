use std::sync::Arc;

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest, UpdateProfileRequest, VerifyOtpRequest,
};
use crate::services::{AuthService, UserService};

#[derive(Clone)]
pub struct AuthState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
}

// ==============================================================================
// PUBLIC HANDLERS
// ==============================================================================

pub async fn register(
    State(state): State<AuthState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let response = state.auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "token": response.token,
            "user": response.user
        })),
    ))
}

pub async fn login(
    State(state): State<AuthState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let response = state.auth.login(request).await?;

    Ok(Json(json!({
        "success": true,
        "token": response.token,
        "user": response.user
    })))
}

pub async fn forgot_password(
    State(state): State<AuthState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    state.auth.forgot_password(&request.email).await?;

    Ok(Json(json!({
        "success": true,
        "message": "OTP sent to email"
    })))
}

pub async fn verify_otp(
    State(state): State<AuthState>,
    Json(request): Json<VerifyOtpRequest>,
) -> Result<Json<Value>, AppError> {
    state.auth.verify_otp(&request.email, &request.otp).await?;

    Ok(Json(json!({
        "success": true,
        "message": "OTP verified successfully"
    })))
}

pub async fn reset_password(
    State(state): State<AuthState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    state.auth.reset_password(request).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Password reset successfully"
    })))
}

// ==============================================================================
// PROTECTED HANDLERS
// ==============================================================================

pub async fn change_password(
    State(state): State<AuthState>,
    Extension(user): Extension<User>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<Value>, AppError> {
    state.auth.change_password(&user.id, request).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Password changed successfully"
    })))
}

pub async fn get_profile(
    State(state): State<AuthState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    debug!("Getting profile for user: {}", user.id);
    let profile = state.users.get_profile(&user.id).await?;

    Ok(Json(json!({
        "success": true,
        "data": profile
    })))
}

pub async fn update_profile(
    State(state): State<AuthState>,
    Extension(user): Extension<User>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Value>, AppError> {
    let profile = state.users.update_profile(&user.id, request).await?;

    Ok(Json(json!({
        "success": true,
        "data": profile
    })))
}

pub async fn deactivate_account(
    State(state): State<AuthState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    state.users.deactivate(&user.id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Account deactivated"
    })))
}
