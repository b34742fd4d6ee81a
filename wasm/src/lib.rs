//! WebAssembly module for the harvest schedule dashboard
//!
//! Provides client-side computation for:
//! - Harvest windows and day-of-year offsets
//! - Filtered, sorted dashboard views and timeline bars
//! - Month apportioned yields
//! - The plain-text table export

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

use shared::{
    build_view, crop_detail, day_of_year, default_crops, export_for_query, parse_day_month,
};

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

fn to_js_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn parse_crops(crops_json: &str) -> Result<Vec<Crop>, String> {
    serde_json::from_str(crops_json).map_err(|e| format!("Invalid crops JSON: {}", e))
}

fn parse_policy(policy: Option<&str>) -> Result<WrapPolicy, String> {
    policy.map_or(Ok(WrapPolicy::default()), |p| p.parse::<WrapPolicy>())
}

fn dashboard_json(
    crops_json: &str,
    reference_year: i32,
    policy: Option<&str>,
    query: &DashboardQuery,
) -> Result<String, String> {
    let crops = parse_crops(crops_json)?;
    let policy = parse_policy(policy)?;
    let view = build_view(&crops, reference_year, policy, query).map_err(|e| e.to_string())?;
    serde_json::to_string(&view).map_err(|e| e.to_string())
}

fn crop_detail_json_impl(
    crops_json: &str,
    reference_year: i32,
    policy: Option<&str>,
    name: &str,
) -> Result<String, String> {
    let crops = parse_crops(crops_json)?;
    let policy = parse_policy(policy)?;
    let detail = crop_detail(&crops, reference_year, policy, name)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Unknown crop: {}", name))?;
    serde_json::to_string(&detail).map_err(|e| e.to_string())
}

fn export_text(
    crops_json: &str,
    reference_year: i32,
    policy: Option<&str>,
    query: &DashboardQuery,
) -> Result<String, String> {
    let crops = parse_crops(crops_json)?;
    let policy = parse_policy(policy)?;
    export_for_query(&crops, reference_year, policy, query).map_err(|e| e.to_string())
}

/// Build every dashboard view for the given filters; returns JSON
#[wasm_bindgen]
pub fn derive_dashboard(
    crops_json: &str,
    reference_year: Option<i32>,
    month: Option<u32>,
    search: Option<String>,
    selected: Option<String>,
    wrap_policy: Option<String>,
) -> Result<String, JsValue> {
    let query = DashboardQuery {
        search,
        month,
        selected,
    };
    let year = reference_year.unwrap_or_else(current_year);
    dashboard_json(crops_json, year, wrap_policy.as_deref(), &query).map_err(to_js_error)
}

/// Detail view of one crop; returns JSON
#[wasm_bindgen]
pub fn crop_detail_json(
    crops_json: &str,
    reference_year: Option<i32>,
    name: &str,
    wrap_policy: Option<String>,
) -> Result<String, JsValue> {
    let year = reference_year.unwrap_or_else(current_year);
    crop_detail_json_impl(crops_json, year, wrap_policy.as_deref(), name).map_err(to_js_error)
}

/// Text table for download, byte-order mark included
#[wasm_bindgen]
pub fn export_table_text(
    crops_json: &str,
    reference_year: Option<i32>,
    month: Option<u32>,
    search: Option<String>,
    wrap_policy: Option<String>,
) -> Result<String, JsValue> {
    let query = DashboardQuery {
        search,
        month,
        selected: None,
    };
    let year = reference_year.unwrap_or_else(current_year);
    export_text(crops_json, year, wrap_policy.as_deref(), &query).map_err(to_js_error)
}

/// Day of year of a `dd.mm` date
#[wasm_bindgen]
pub fn harvest_day_of_year(date: &str, reference_year: Option<i32>) -> Result<u32, JsValue> {
    let year = reference_year.unwrap_or_else(current_year);
    parse_day_month(date, year)
        .map(day_of_year)
        .map_err(|e| to_js_error(e.to_string()))
}

/// Palette colour for the crop at `index` in the dataset
#[wasm_bindgen]
pub fn crop_color(index: usize) -> String {
    shared::color_for(index).to_string()
}

/// Tonnage formatted for the `uk-UA` locale
#[wasm_bindgen]
pub fn format_tonnes_uk(value: f64) -> String {
    shared::format_tonnes(value)
}

/// The built-in dataset as JSON
#[wasm_bindgen]
pub fn default_dataset_json() -> String {
    serde_json::to_string(&default_crops()).unwrap_or_else(|_| "[]".to_string())
}
