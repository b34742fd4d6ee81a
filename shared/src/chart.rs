//! Timeline chart geometry
//!
//! The dashboard draws each crop as a horizontal bar: a transparent lead-in
//! from the start of the axis to the first harvest day, followed by a
//! coloured span of `harvest_duration` days. The axis covers 1 June to
//! 15 November of the reference year with a tick on the first of each month.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::day_of_year;
use crate::models::ChartCrop;
use crate::month::month_short_name_uk;

/// First month on the timeline (0-based, June)
pub const DOMAIN_START_MONTH0: u32 = 5;
/// Last month with a tick on the timeline (0-based, November)
pub const DOMAIN_END_MONTH0: u32 = 10;
/// Day of month the timeline stops at in its last month
pub const DOMAIN_END_DAY: u32 = 15;

/// A labelled tick on the timeline axis
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    /// Days from the axis origin
    pub offset: i32,
    pub label: &'static str,
}

/// The timeline's horizontal axis
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineAxis {
    pub domain_start: NaiveDate,
    pub domain_end: NaiveDate,
    /// Day of year of `domain_start`; bar offsets are relative to it
    pub origin_day: u32,
    /// Axis length in days, `[0, length]`
    pub length: i32,
    pub ticks: Vec<AxisTick>,
}

impl TimelineAxis {
    /// The June-November axis of `reference_year`
    pub fn growing_season(reference_year: i32) -> Option<Self> {
        let domain_start = NaiveDate::from_ymd_opt(reference_year, DOMAIN_START_MONTH0 + 1, 1)?;
        let domain_end =
            NaiveDate::from_ymd_opt(reference_year, DOMAIN_END_MONTH0 + 1, DOMAIN_END_DAY)?;
        let origin_day = day_of_year(domain_start);

        let ticks = (DOMAIN_START_MONTH0..=DOMAIN_END_MONTH0)
            .filter_map(|month0| {
                let first = NaiveDate::from_ymd_opt(reference_year, month0 + 1, 1)?;
                Some(AxisTick {
                    offset: day_of_year(first) as i32 - origin_day as i32,
                    label: month_short_name_uk(first.month0())?,
                })
            })
            .collect();

        Some(Self {
            domain_start,
            domain_end,
            origin_day,
            length: day_of_year(domain_end) as i32 - origin_day as i32,
            ticks,
        })
    }

    /// Label of the month containing the day at `offset` from the origin
    pub fn label_at(&self, offset: i32) -> Option<&'static str> {
        let date = self
            .domain_start
            .checked_add_signed(chrono::Duration::days(offset as i64))?;
        month_short_name_uk(date.month0())
    }

    /// Bar for one crop on this axis
    pub fn bar(&self, crop: &ChartCrop, selected: Option<&str>) -> ChartBar {
        ChartBar {
            name: crop.name().to_string(),
            offset: crop.start_day as i32 - self.origin_day as i32,
            harvest_duration: crop.harvest_duration,
            color: crop.color,
            highlighted: selected.map_or(true, |name| name == crop.name()),
        }
    }

    /// Bars for crops already in display order
    pub fn bars(&self, crops: &[ChartCrop], selected: Option<&str>) -> Vec<ChartBar> {
        crops.iter().map(|crop| self.bar(crop, selected)).collect()
    }
}

/// One crop's bar on the timeline
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    pub name: String,
    /// Transparent lead-in in days from the axis origin; negative when the
    /// harvest starts before the axis does
    pub offset: i32,
    pub harvest_duration: u32,
    pub color: &'static str,
    /// False when another crop is selected
    pub highlighted: bool,
}
