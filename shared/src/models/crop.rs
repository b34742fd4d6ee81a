//! Crop models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A crop as authored in the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    /// Unique crop name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// First harvest day, `dd.mm`
    pub start_date: String,
    /// Last harvest day, `dd.mm`
    pub end_date: String,
    /// Total tonnage over the whole harvest window
    #[serde(rename = "yield")]
    #[validate(range(min = 0.0))]
    pub yield_tonnes: f64,
}

impl Crop {
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        yield_tonnes: f64,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            yield_tonnes,
        }
    }
}

/// Harvest window of a crop in day-of-year coordinates
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HarvestWindow {
    pub start: NaiveDate,
    /// Last harvest day; in the following year when the window rolled over
    pub end: NaiveDate,
    pub start_day: u32,
    pub harvest_duration: u32,
}

/// A crop enriched with its derived scheduling fields
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartCrop {
    #[serde(flatten)]
    pub crop: Crop,
    /// 1-based day of year of the first harvest day
    pub start_day: u32,
    /// Harvest length in days, both ends included
    pub harvest_duration: u32,
    pub color: &'static str,
    /// Position in the input dataset
    pub original_index: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ChartCrop {
    pub fn name(&self) -> &str {
        &self.crop.name
    }

    pub fn yield_tonnes(&self) -> f64 {
        self.crop.yield_tonnes
    }

    /// Average harvest per day, zero for an empty window
    pub fn average_yield_per_day(&self) -> f64 {
        if self.harvest_duration > 0 {
            self.crop.yield_tonnes / self.harvest_duration as f64
        } else {
            0.0
        }
    }

    /// Average harvest per week, zero for an empty window
    pub fn tonnes_per_week(&self) -> f64 {
        self.average_yield_per_day() * 7.0
    }
}

/// Table row: an enriched crop plus its yield in the selected period
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropTableRow {
    #[serde(flatten)]
    pub crop: ChartCrop,
    /// Share of the yield inside the selected month, uniform-rate estimate.
    /// Equals the total yield when no month is selected.
    pub yield_for_period: f64,
}
