//! Health check handlers

use axum::{extract::State, Json};

use crate::models::HealthResponse;
use crate::AppState;

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        crops_loaded: state.dataset.len(),
        reference_year: state.config.dataset.reference_year(),
        wrap_policy: state.config.dataset.wrap_policy.to_string(),
    })
}
