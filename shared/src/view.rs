//! Assembles the dashboard's views from a dataset and the active filters

use serde::Serialize;

use crate::chart::{ChartBar, TimelineAxis};
use crate::derivation::{
    alphabetical, chronological, enrich_crops, filter_by_month, filter_by_search, find_crop,
    summarize, yield_for_period,
};
use crate::error::DatasetError;
use crate::export::export_table;
use crate::models::{ChartCrop, Crop, CropTableRow, DatasetSummary};
use crate::types::{DashboardQuery, WrapPolicy};

/// Everything the dashboard shows for one set of filters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub reference_year: i32,
    pub selected_month: Option<u32>,
    /// Filtered crops by start day
    pub chart: Vec<ChartCrop>,
    /// Filtered crops by name
    pub list: Vec<ChartCrop>,
    /// Filtered crops by name with their yield in the selected month
    pub table: Vec<CropTableRow>,
    /// Aggregates over the unfiltered dataset
    pub summary: DatasetSummary,
    pub axis: Option<TimelineAxis>,
    pub bars: Vec<ChartBar>,
}

/// One crop with its detail figures
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDetail {
    pub crop: ChartCrop,
    /// Average tonnes per week over the harvest
    pub tonnes_per_week: f64,
    pub axis: Option<TimelineAxis>,
    pub bar: Option<ChartBar>,
}

/// Run one derivation pass and build every view for `query`.
pub fn build_view(
    crops: &[Crop],
    reference_year: i32,
    policy: WrapPolicy,
    query: &DashboardQuery,
) -> Result<DashboardView, DatasetError> {
    let enriched = enrich_crops(crops, reference_year, policy)?;
    let summary = summarize(&enriched);

    let chart = filtered(&chronological(&enriched), query);
    let list = alphabetical(&chart);
    let table = table_rows(&list, query.month);

    let axis = TimelineAxis::growing_season(reference_year);
    let bars = axis
        .as_ref()
        .map(|axis| axis.bars(&chart, query.selected.as_deref()))
        .unwrap_or_default();

    Ok(DashboardView {
        reference_year,
        selected_month: query.month,
        chart,
        list,
        table,
        summary,
        axis,
        bars,
    })
}

/// Apply the search and month filters
pub fn filtered(crops: &[ChartCrop], query: &DashboardQuery) -> Vec<ChartCrop> {
    let by_search = match query.search.as_deref() {
        Some(term) if !term.is_empty() => filter_by_search(crops, term),
        _ => crops.to_vec(),
    };
    filter_by_month(&by_search, query.month)
}

/// Attach the period yield to each crop, keeping the given order
pub fn table_rows(crops: &[ChartCrop], month0: Option<u32>) -> Vec<CropTableRow> {
    crops
        .iter()
        .map(|crop| CropTableRow {
            yield_for_period: yield_for_period(crop, month0),
            crop: crop.clone(),
        })
        .collect()
}

/// Export text of the table the dashboard shows for `query`
pub fn export_for_query(
    crops: &[Crop],
    reference_year: i32,
    policy: WrapPolicy,
    query: &DashboardQuery,
) -> Result<String, DatasetError> {
    let enriched = enrich_crops(crops, reference_year, policy)?;
    let visible = alphabetical(&filtered(&enriched, query));
    Ok(export_table(
        &table_rows(&visible, query.month),
        query.month.is_some(),
    ))
}

/// Detail view for the crop named `name`, `None` when there is no such crop
pub fn crop_detail(
    crops: &[Crop],
    reference_year: i32,
    policy: WrapPolicy,
    name: &str,
) -> Result<Option<CropDetail>, DatasetError> {
    let enriched = enrich_crops(crops, reference_year, policy)?;
    let Some(crop) = find_crop(&enriched, name) else {
        return Ok(None);
    };

    let axis = TimelineAxis::growing_season(reference_year);
    let bar = axis.as_ref().map(|axis| axis.bar(crop, None));
    Ok(Some(CropDetail {
        tonnes_per_week: crop.tonnes_per_week(),
        crop: crop.clone(),
        axis,
        bar,
    }))
}
