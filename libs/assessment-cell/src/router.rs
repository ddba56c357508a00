use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, AssessmentState};

/// PCOS, mental-health and FSFI routes mounted under `/api`.
///
/// Each assessment is reachable both through its short path and the longer path the
/// older app builds still call.
pub fn assessment_routes(config: Arc<AppConfig>, state: AssessmentState) -> Router {
    Router::new()
        .route("/pcos", get(handlers::pcos_history).post(handlers::submit_pcos))
        .route("/pcos/history", get(handlers::pcos_history))
        .route("/pcos/latest", get(handlers::latest_pcos))
        .route("/pcos-assessment", get(handlers::latest_pcos))
        .route("/pcos-assessment/questions", get(handlers::pcos_questions))
        .route("/pcos-assessment/submit", post(handlers::submit_pcos))
        .route("/pcos-assessment/history", get(handlers::pcos_history))
        .route("/mental-health", get(handlers::list_tests))
        .route("/mental-health/submit", post(handlers::submit_test))
        .route("/mental-health/results", get(handlers::test_results))
        .route("/tests", get(handlers::list_tests))
        .route("/tests/{test_name}", get(handlers::get_test))
        .route("/test-results", get(handlers::test_results).post(handlers::submit_test))
        .route("/fsfi", get(handlers::fsfi_test).post(handlers::submit_fsfi))
        .route("/fsfi/test", get(handlers::fsfi_test))
        .route("/fsfi/submit", post(handlers::submit_fsfi))
        .route("/fsfi/results", get(handlers::fsfi_results))
        .route("/fsfi/my-results", get(handlers::fsfi_results))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(state)
}
