pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::relay::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", post(handlers::handle_query))
        // Legacy path used by older frontends; same handler.
        .route("/api/query", post(handlers::handle_query))
        .with_state(state)
}
