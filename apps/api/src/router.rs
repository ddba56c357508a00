use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use appointment_cell::router::appointment_routes;
use assessment_cell::router::assessment_routes;
use auth_cell::router::{account_routes, auth_routes};
use clinic_cell::router::clinic_routes;
use doctor_cell::router::doctor_routes;
use journal_cell::router::journal_routes;
use tracker_cell::router::tracker_routes;

use crate::services::AppServices;

pub const SERVICE_NAME: &str = "Women's Health API";

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

pub fn create_router(services: AppServices) -> Router {
    let config = services.config;

    let api = Router::new()
        .nest("/doctors", doctor_routes(config.clone(), services.doctors))
        .merge(account_routes(config.clone(), services.auth.clone()))
        .merge(appointment_routes(config.clone(), services.appointments))
        .merge(clinic_routes(config.clone(), services.clinics))
        .merge(tracker_routes(config.clone(), services.trackers))
        .merge(assessment_routes(config.clone(), services.assessments))
        .merge(journal_routes(config.clone(), services.journals));

    Router::new()
        .route("/", get(|| async { "Women's Health API is running!" }))
        .route("/health", get(health))
        .nest("/user", auth_routes(config, services.auth))
        .nest("/api", api)
}
