//! Crop list, table and detail handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared::{ChartCrop, CropDetail, CropTableRow, DashboardView};

use crate::error::AppResult;
use crate::models::DashboardParams;
use crate::services::DashboardService;
use crate::AppState;

/// Every dashboard view for the given filters
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Json<DashboardView>> {
    let query = params.into_query()?;
    let view = DashboardService::from_state(&state).view(&query)?;
    Ok(Json(view))
}

/// Filtered crops in chronological order
pub async fn list_crops(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Json<Vec<ChartCrop>>> {
    let query = params.into_query()?;
    let crops = DashboardService::from_state(&state).chart(&query)?;
    Ok(Json(crops))
}

/// Filtered crops in alphabetical order with their period yield
pub async fn get_crop_table(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Json<Vec<CropTableRow>>> {
    let query = params.into_query()?;
    let rows = DashboardService::from_state(&state).table(&query)?;
    Ok(Json(rows))
}

/// Detail view of one crop
pub async fn get_crop(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<CropDetail>> {
    tracing::debug!("Crop detail requested: {}", name);
    let detail = DashboardService::from_state(&state).detail(&name)?;
    Ok(Json(detail))
}
