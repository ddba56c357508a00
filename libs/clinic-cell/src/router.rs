use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, ClinicState};

/// Clinic and diagnostic routes mounted under `/api`.
pub fn clinic_routes(config: Arc<AppConfig>, state: ClinicState) -> Router {
    Router::new()
        .route("/clinics", get(handlers::list_clinics))
        .route("/clinic-bookings", post(handlers::create_clinic_booking))
        .route("/clinic-bookings/my-bookings", get(handlers::my_clinic_bookings))
        .route("/clinic-bookings/verify-payment", post(handlers::verify_clinic_payment))
        .route("/public/diagnostics", get(handlers::list_diagnostics))
        .route("/diagnosticsUsers", get(handlers::my_diagnostic_bookings))
        .route("/diagnostics-bookings", post(handlers::create_diagnostic_booking))
        .route(
            "/diagnostics-bookings/verify-payment",
            post(handlers::verify_diagnostic_payment),
        )
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(state)
}
