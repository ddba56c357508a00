use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, AppointmentState};

/// Routes mounted under `/api`.
pub fn appointment_routes(config: Arc<AppConfig>, state: AppointmentState) -> Router {
    Router::new()
        .route("/time-slots", get(handlers::time_slots))
        .route("/bookings", post(handlers::create_booking))
        .route("/bookings/verify", post(handlers::verify_payment))
        .route("/bookings/my-with-doctors", get(handlers::my_bookings))
        .route("/sessions/active", get(handlers::active_sessions))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(state)
}
