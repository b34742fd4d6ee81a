//! Summary card and month filter handlers

use axum::{extract::State, Json};
use shared::{DatasetSummary, MonthOption, MONTH_FILTER_OPTIONS};

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;

/// Aggregates over the whole dataset
pub async fn get_summary(State(state): State<AppState>) -> AppResult<Json<DatasetSummary>> {
    let summary = DashboardService::from_state(&state).summary()?;
    Ok(Json(summary))
}

/// Months offered by the month filter
pub async fn list_months() -> Json<Vec<MonthOption>> {
    Json(MONTH_FILTER_OPTIONS.to_vec())
}
