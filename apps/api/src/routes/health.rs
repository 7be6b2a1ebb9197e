use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness probe. Echoes the bound port so deploy checks can confirm config.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "Job Matcher API",
        "version": "1.0.0",
        "message": "Backend is running successfully",
        "port": state.config.port
    }))
}
