use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, TrackerState};

/// Tracker routes mounted under `/api`, including the older path aliases the apps still call.
pub fn tracker_routes(config: Arc<AppConfig>, state: TrackerState) -> Router {
    let period = get(handlers::get_period_cycles).post(handlers::add_period_cycle);
    let pregnancy = get(handlers::get_pregnancy).post(handlers::add_pregnancy_entry);
    let symptoms = get(handlers::get_symptoms).post(handlers::submit_symptoms);

    Router::new()
        .route("/period", period.clone().delete(handlers::reset_period_tracker))
        .route("/period-cycle", period)
        .route("/period-cycle/reset", delete(handlers::reset_period_tracker))
        .route("/pregnancy", pregnancy.clone())
        .route("/pregnancy-tracker", pregnancy)
        .route("/symptoms", symptoms.clone())
        .route("/symptoms-tracking", symptoms)
        .route(
            "/weight-metabolic-wellness",
            get(handlers::get_weight_entries).post(handlers::add_weight_entry),
        )
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(state)
}
