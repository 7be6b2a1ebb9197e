//! Axum route handlers for the prediction API.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::matcher::predictor::{missing_required_fields, MatchRequest};
use crate::matcher::report::MatchReport;
use crate::state::AppState;

/// POST /predict
///
/// Validates the payload, then delegates to the configured predictor.
/// Every missing required field is collected into one validation error
/// rather than failing on the first.
pub async fn handle_predict(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchReport>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Validation(format!("Malformed request body: {rejection}"))
    })?;

    let missing = missing_required_fields(&request);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let report = state.predictor.predict(&request).await?;

    Ok(Json(report))
}
