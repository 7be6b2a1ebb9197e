pub mod health;
pub mod meta;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matcher::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(meta::root_handler))
        .route("/health", get(health::health_handler))
        .route("/docs", get(meta::docs_handler))
        .route("/predict", post(handlers::handle_predict))
        .with_state(state)
}
