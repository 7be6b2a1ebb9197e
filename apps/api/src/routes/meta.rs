use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service metadata and the endpoint map.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Job Matcher API is running",
        "version": "1.0.0",
        "endpoints": {
            "health": "/health",
            "predict": "/predict (POST)",
            "docs": "/docs"
        }
    }))
}

/// GET /docs
/// Static OpenAPI-style description of the prediction contract.
pub async fn docs_handler() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Job Matcher API",
            "version": "1.0.0",
            "description": "Mock resume-to-job matching service. Returns a heuristic \
                match score, a predicted salary band, and parsed resume metadata."
        },
        "paths": {
            "/predict": {
                "post": {
                    "summary": "Match a resume against a job posting",
                    "requestBody": {
                        "required": ["resume_text", "job_title", "description"],
                        "optional": ["requirements", "benefits"]
                    },
                    "responses": {
                        "200": "Match report",
                        "400": "Missing or malformed fields",
                        "500": "Internal error"
                    }
                }
            },
            "/health": { "get": { "summary": "Liveness probe" } },
            "/": { "get": { "summary": "Service metadata" } }
        }
    }))
}
