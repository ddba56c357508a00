use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Requires a valid bearer token and stores the authenticated `User` in request extensions.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !request.headers().contains_key(AUTHORIZATION) {
        return Err(AppError::Auth("Authorization header required".to_string()));
    }

    let Authorization(bearer) = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| AppError::Auth("Invalid authorization format".to_string()))?;

    let user = validate_token(bearer.token(), &config.jwt_secret).map_err(|e| {
        debug!("Rejected bearer token: {}", e);
        AppError::Auth("Invalid token".to_string())
    })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
