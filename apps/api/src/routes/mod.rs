pub mod health;

use axum::{routing::get, Router};

use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/jobs",
            get(handlers::handle_list_jobs).post(handlers::handle_post_job),
        )
        .route("/api/v1/jobs/latest", get(handlers::handle_latest_jobs))
        .route("/api/v1/jobs/admin", get(handlers::handle_admin_jobs))
        .route("/api/v1/jobs/:id", get(handlers::handle_get_job))
        .route("/api/v1/catalog", get(handlers::handle_catalog))
        .with_state(state)
}
