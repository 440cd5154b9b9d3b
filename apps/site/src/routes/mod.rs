pub mod health;
pub mod site;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(site::handle_index))
        .route("/files/:name", get(site::handle_file))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
