use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, JournalState};

pub fn journal_routes(config: Arc<AppConfig>, state: JournalState) -> Router {
    Router::new()
        .route("/journals", get(handlers::list_journals).post(handlers::create_journal))
        .route(
            "/journals/{journal_id}",
            get(handlers::get_journal)
                .put(handlers::update_journal)
                .delete(handlers::delete_journal),
        )
        .route("/journals/user/{user_id}", get(handlers::user_journals))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(state)
}
