//! Export handler for the plain-text crop table

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use shared::EXPORT_FILE_NAME;

use crate::error::AppResult;
use crate::models::DashboardParams;
use crate::services::DashboardService;
use crate::AppState;

/// Download the table shown for the given filters
pub async fn export_table(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.into_query()?;
    let text = DashboardService::from_state(&state).export(&query)?;
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    ))
}
