//! Dashboard service: derivation passes over the loaded dataset

use std::sync::Arc;

use shared::{
    alphabetical, build_view, chronological, crop_detail, enrich_crops, export_for_query,
    filtered, summarize, table_rows, CropDetail, ChartCrop, Crop, CropTableRow, DashboardQuery,
    DashboardView, DatasetSummary, WrapPolicy,
};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Derives dashboard views for one reference year and wrap policy
pub struct DashboardService {
    crops: Arc<Vec<Crop>>,
    reference_year: i32,
    policy: WrapPolicy,
}

impl DashboardService {
    pub fn new(crops: Arc<Vec<Crop>>, reference_year: i32, policy: WrapPolicy) -> Self {
        Self {
            crops,
            reference_year,
            policy,
        }
    }

    /// Service over the application's dataset and configuration
    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.dataset.clone(),
            state.config.dataset.reference_year(),
            state.config.dataset.wrap_policy,
        )
    }

    fn enriched(&self) -> AppResult<Vec<ChartCrop>> {
        Ok(enrich_crops(&self.crops, self.reference_year, self.policy)?)
    }

    /// Every dashboard view for `query`
    pub fn view(&self, query: &DashboardQuery) -> AppResult<DashboardView> {
        Ok(build_view(&self.crops, self.reference_year, self.policy, query)?)
    }

    /// Filtered crops by start day
    pub fn chart(&self, query: &DashboardQuery) -> AppResult<Vec<ChartCrop>> {
        Ok(filtered(&chronological(&self.enriched()?), query))
    }

    /// Filtered crops by name with their period yield
    pub fn table(&self, query: &DashboardQuery) -> AppResult<Vec<CropTableRow>> {
        let visible = alphabetical(&filtered(&self.enriched()?, query));
        Ok(table_rows(&visible, query.month))
    }

    pub fn summary(&self) -> AppResult<DatasetSummary> {
        Ok(summarize(&self.enriched()?))
    }

    pub fn detail(&self, name: &str) -> AppResult<CropDetail> {
        crop_detail(&self.crops, self.reference_year, self.policy, name)?
            .ok_or_else(|| AppError::NotFound(format!("Crop '{}'", name)))
    }

    pub fn export(&self, query: &DashboardQuery) -> AppResult<String> {
        Ok(export_for_query(
            &self.crops,
            self.reference_year,
            self.policy,
            query,
        )?)
    }
}
