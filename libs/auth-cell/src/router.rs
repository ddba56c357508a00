use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, AuthState};

/// Routes mounted under `/user`.
pub fn auth_routes(config: Arc<AppConfig>, state: AuthState) -> Router {
    let public_routes = Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/forgot-password", post(handlers::forgot_password))
        .route("/verify-otp", post(handlers::verify_otp))
        .route("/reset-password", post(handlers::reset_password));

    let protected_routes = Router::new()
        .route("/change-password", post(handlers::change_password))
        .route("/profile", get(handlers::get_profile).put(handlers::update_profile))
        .layer(middleware::from_fn_with_state(config, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

/// Account routes mounted under `/api`.
pub fn account_routes(config: Arc<AppConfig>, state: AuthState) -> Router {
    Router::new()
        .route(
            "/users/me",
            get(handlers::get_profile)
                .put(handlers::update_profile)
                .delete(handlers::deactivate_account),
        )
        .route("/user/change-password", post(handlers::change_password))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(state)
}
