//! Request and response models specific to the Harvest Schedule server
//!
//! Domain models live in the shared crate

use serde::{Deserialize, Serialize};
use shared::{is_valid_month_index, DashboardQuery};

use crate::error::{AppError, AppResult};

/// Query parameters shared by the dashboard, list, table and export endpoints
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub search: Option<String>,
    /// 0-based month index
    pub month: Option<u32>,
    pub selected: Option<String>,
}

impl DashboardParams {
    /// Check the month and build the derivation query
    pub fn into_query(self) -> AppResult<DashboardQuery> {
        if let Some(month) = self.month {
            if !is_valid_month_index(month) {
                return Err(AppError::invalid_query(
                    "month",
                    format!("Month index {} is out of range 0-11", month),
                    format!("Номер місяця {} поза межами 0-11", month),
                ));
            }
        }

        Ok(DashboardQuery {
            search: self.search.filter(|term| !term.trim().is_empty()),
            month: self.month,
            selected: self.selected,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub crops_loaded: usize,
    pub reference_year: i32,
    pub wrap_policy: String,
}
