//! Calendar derivation engine
//!
//! Turns raw [`Crop`] records into [`ChartCrop`] records carrying day-of-year
//! offsets, harvest duration and palette colour, and apportions yield to
//! calendar windows under a uniform daily-rate model.
//!
//! Every function is pure. The reference year and the [`WrapPolicy`] are
//! explicit arguments and are meant to be fixed for a whole derivation pass.

use chrono::{Datelike, Months, NaiveDate};

use crate::calendar::{day_of_year, format_day_month, inclusive_days, month_window, parse_day_month};
use crate::collation::compare_uk;
use crate::error::{DatasetError, ParseError};
use crate::models::{format_tonnes, ChartCrop, Crop, DatasetSummary, HarvestWindow};
use crate::types::{DateRange, WrapPolicy};

/// Chart palette, assigned to crops by input position
pub const PALETTE: [&str; 30] = [
    "#8B5CF6", "#EC4899", "#10B981", "#F59E0B", "#3B82F6", "#EF4444",
    "#6366F1", "#D946EF", "#22C55E", "#EAB308", "#60A5FA", "#F87171",
    "#A78BFA", "#F472B6", "#34D399", "#FBBF24", "#93C5FD", "#FCA5A5",
    "#F472B6", "#14B8A6", "#F97316", "#6D28D9", "#4F46E5", "#BE185D",
    "#059669", "#D97706", "#2563EB", "#DC2626", "#7C3AED", "#DB2777",
];

/// Palette colour for the crop at `index` in the input order
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Harvest window of `crop` in `reference_year`.
///
/// The duration is inclusive. When the end day-month lies before the start
/// day-month, `policy` decides: [`WrapPolicy::Clamp`] yields a zero duration,
/// [`WrapPolicy::RollOver`] moves the end into the following year.
pub fn derive_harvest_window(
    crop: &Crop,
    reference_year: i32,
    policy: WrapPolicy,
) -> Result<HarvestWindow, ParseError> {
    let start = parse_day_month(&crop.start_date, reference_year)?;
    let mut end = parse_day_month(&crop.end_date, reference_year)?;

    let start_day = day_of_year(start);
    let end_day = day_of_year(end);

    let harvest_duration = if end_day >= start_day {
        end_day - start_day + 1
    } else {
        match policy {
            WrapPolicy::Clamp => 0,
            WrapPolicy::RollOver => {
                // 29.02 of a leap year lands on 28.02 of the next one
                end = end.checked_add_months(Months::new(12)).ok_or_else(|| {
                    ParseError::NonexistentDate {
                        input: crop.end_date.clone(),
                        year: reference_year + 1,
                    }
                })?;
                inclusive_days(start, end)
            }
        }
    };

    Ok(HarvestWindow {
        start,
        end,
        start_day,
        harvest_duration,
    })
}

/// Enrich every crop, keeping the input order.
///
/// Fails on the first record whose dates do not parse, naming the record.
pub fn enrich_crops(
    crops: &[Crop],
    reference_year: i32,
    policy: WrapPolicy,
) -> Result<Vec<ChartCrop>, DatasetError> {
    crops
        .iter()
        .enumerate()
        .map(|(index, crop)| enrich_crop(crop, index, reference_year, policy))
        .collect()
}

fn enrich_crop(
    crop: &Crop,
    index: usize,
    reference_year: i32,
    policy: WrapPolicy,
) -> Result<ChartCrop, DatasetError> {
    // Report which field failed, not just that the record did.
    parse_day_month(&crop.start_date, reference_year).map_err(|source| {
        DatasetError::InvalidDate {
            name: crop.name.clone(),
            field: "startDate",
            source,
        }
    })?;
    let window = derive_harvest_window(crop, reference_year, policy).map_err(|source| {
        DatasetError::InvalidDate {
            name: crop.name.clone(),
            field: "endDate",
            source,
        }
    })?;

    Ok(ChartCrop {
        crop: crop.clone(),
        start_day: window.start_day,
        harvest_duration: window.harvest_duration,
        color: color_for(index),
        original_index: index,
        start: window.start,
        end: window.end,
    })
}

/// Portion of the crop's yield inside the closed window
/// `[window_start, window_end]`, assuming the yield is spread evenly over
/// the harvest days. This is an estimate, not a yield curve.
pub fn yield_for_window(crop: &ChartCrop, window_start: NaiveDate, window_end: NaiveDate) -> f64 {
    let average = crop.average_yield_per_day();
    if average == 0.0 {
        return 0.0;
    }

    let harvest = DateRange::new(crop.start, crop.end);
    match harvest.intersect(&DateRange::new(window_start, window_end)) {
        Some(overlap) => average * overlap.days() as f64,
        None => 0.0,
    }
}

/// Portion of the crop's yield harvested in the month with 0-based index
/// `month0`. The month is taken in the crop's reference year and, for a
/// harvest rolled into the next year, in that year too.
pub fn yield_for_month(crop: &ChartCrop, month0: u32) -> f64 {
    let year = crop.start.year();
    (year..=crop.end.year().max(year))
        .filter_map(|y| month_window(y, month0))
        .map(|(first, last)| yield_for_window(crop, first, last))
        .sum()
}

/// Yield shown in the table: the month share when a month is selected,
/// otherwise the whole yield.
pub fn yield_for_period(crop: &ChartCrop, month0: Option<u32>) -> f64 {
    match month0 {
        Some(month0) => yield_for_month(crop, month0),
        None => crop.yield_tonnes(),
    }
}

/// Whether the harvest crosses the year boundary: clamped to an empty window or
/// rolled over into the following year
pub fn crosses_year_boundary(crop: &ChartCrop) -> bool {
    crop.end < crop.start || crop.end.year() > crop.start.year()
}

/// Whether the harvest touches the month with 0-based index `month0`.
///
/// A derived window is a member of every month it overlaps, in either year
/// for a rolled-over harvest. A clamped window has no days, so its
/// membership comes from calendar months alone: a range whose end month
/// precedes its start month wraps through December into January.
pub fn harvest_includes_month(crop: &ChartCrop, month0: u32) -> bool {
    if crop.end < crop.start {
        let start_month = crop.start.month0();
        let end_month = crop.end.month0();
        return if start_month <= end_month {
            month0 >= start_month && month0 <= end_month
        } else {
            month0 >= start_month || month0 <= end_month
        };
    }

    let harvest = DateRange::new(crop.start, crop.end);
    (crop.start.year()..=crop.end.year())
        .filter_map(|year| month_window(year, month0))
        .any(|(first, last)| harvest.intersect(&DateRange::new(first, last)).is_some())
}

/// Keep the crops harvested in `month0`; `None` keeps everything
pub fn filter_by_month(crops: &[ChartCrop], month0: Option<u32>) -> Vec<ChartCrop> {
    match month0 {
        None => crops.to_vec(),
        Some(month0) => crops
            .iter()
            .filter(|crop| harvest_includes_month(crop, month0))
            .cloned()
            .collect(),
    }
}

/// Keep the crops whose name contains `term`, ignoring case
pub fn filter_by_search(crops: &[ChartCrop], term: &str) -> Vec<ChartCrop> {
    let needle = term.to_lowercase();
    crops
        .iter()
        .filter(|crop| crop.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Copy sorted by start day, ties kept in input order
pub fn chronological(crops: &[ChartCrop]) -> Vec<ChartCrop> {
    let mut sorted = crops.to_vec();
    sorted.sort_by_key(|crop| crop.start_day);
    sorted
}

/// Copy sorted by name in Ukrainian alphabetical order
pub fn alphabetical(crops: &[ChartCrop]) -> Vec<ChartCrop> {
    let mut sorted = crops.to_vec();
    sorted.sort_by(|a, b| compare_uk(a.name(), b.name()));
    sorted
}

/// Summary cards over the whole dataset
pub fn summarize(crops: &[ChartCrop]) -> DatasetSummary {
    let total_yield: f64 = crops.iter().map(ChartCrop::yield_tonnes).sum();
    let earliest = crops.iter().map(|crop| crop.start).min();
    let latest = crops.iter().map(|crop| crop.end).max();

    DatasetSummary {
        total_crops: crops.len(),
        total_yield,
        total_yield_label: format_tonnes(total_yield),
        earliest_start_date: earliest.map(format_day_month).unwrap_or_default(),
        latest_end_date: latest.map(format_day_month).unwrap_or_default(),
    }
}

/// Look up a crop by its exact name
pub fn find_crop<'a>(crops: &'a [ChartCrop], name: &str) -> Option<&'a ChartCrop> {
    crops.iter().find(|crop| crop.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2025;

    fn enrich_one(name: &str, start: &str, end: &str, tonnes: f64, policy: WrapPolicy) -> ChartCrop {
        enrich_crops(&[Crop::new(name, start, end, tonnes)], YEAR, policy)
            .unwrap()
            .remove(0)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cucumber_window() {
        let crop = Crop::new("Огірок", "24.06", "23.08", 104.0);
        let window = derive_harvest_window(&crop, YEAR, WrapPolicy::Clamp).unwrap();
        assert_eq!(window.start_day, 175);
        assert_eq!(window.harvest_duration, 61);
    }

    #[test]
    fn test_cucumber_july_yield() {
        let crop = enrich_one("Огірок", "24.06", "23.08", 104.0, WrapPolicy::Clamp);
        assert!((crop.average_yield_per_day() - 1.7049).abs() < 1e-3);

        let july = yield_for_window(&crop, date(YEAR, 7, 1), date(YEAR, 7, 31));
        assert!((july - 104.0 / 61.0 * 31.0).abs() < 1e-9);
        assert!((july - 52.85).abs() < 0.01);
        assert!((yield_for_month(&crop, 6) - july).abs() < 1e-9);
    }

    #[test]
    fn test_single_day_harvest() {
        let crop = enrich_one("Кріп", "10.07", "10.07", 5.0, WrapPolicy::Clamp);
        assert_eq!(crop.harvest_duration, 1);
        assert!((yield_for_month(&crop, 6) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_wraparound_clamped() {
        let crop = enrich_one("Зимова", "01.12", "31.01", 62.0, WrapPolicy::Clamp);
        assert_eq!(crop.harvest_duration, 0);
        assert_eq!(yield_for_month(&crop, 11), 0.0);
        assert_eq!(crop.tonnes_per_week(), 0.0);
    }

    #[test]
    fn test_wraparound_rolled_over() {
        let crop = enrich_one("Зимова", "01.12", "31.01", 62.0, WrapPolicy::RollOver);
        assert_eq!(crop.start_day, 335);
        assert_eq!(crop.harvest_duration, 62);
        assert_eq!(crop.end, date(YEAR + 1, 1, 31));
        assert!((yield_for_month(&crop, 11) - 31.0).abs() < 1e-9);
        assert!((yield_for_month(&crop, 0) - 31.0).abs() < 1e-9);
        assert_eq!(yield_for_month(&crop, 5), 0.0);
    }

    #[test]
    fn test_rolled_over_leap_day_end() {
        let crop = Crop::new("Зимова", "01.03", "29.02", 366.0);
        let window = derive_harvest_window(&crop, 2024, WrapPolicy::RollOver).unwrap();
        assert_eq!(window.end, date(2025, 2, 28));
        assert_eq!(window.harvest_duration, 365);

        let enriched = enrich_crops(&[crop], 2024, WrapPolicy::RollOver).unwrap();
        assert!(crosses_year_boundary(&enriched[0]));
    }

    #[test]
    fn test_rolled_over_same_month_wrap_covers_every_month() {
        // 20.11 to 10.11 of the next year
        let crop = enrich_one("Озимина", "20.11", "10.11", 356.0, WrapPolicy::RollOver);
        assert_eq!(crop.harvest_duration, 356);
        let crops = vec![crop];
        for month0 in 0..12 {
            assert_eq!(filter_by_month(&crops, Some(month0)).len(), 1, "month {month0}");
            assert!(yield_for_month(&crops[0], month0) > 0.0, "month {month0}");
        }
        assert!((yield_for_month(&crops[0], 5) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_same_month_wrap_keeps_calendar_rule() {
        let crops = vec![enrich_one("Озимина", "20.11", "10.11", 356.0, WrapPolicy::Clamp)];
        assert!(crosses_year_boundary(&crops[0]));
        assert_eq!(filter_by_month(&crops, Some(10)).len(), 1);
        assert!(filter_by_month(&crops, Some(5)).is_empty());
    }

    #[test]
    fn test_forward_harvest_does_not_cross_year() {
        let crop = enrich_one("Огірок", "24.06", "23.08", 104.0, WrapPolicy::RollOver);
        assert!(!crosses_year_boundary(&crop));
    }

    #[test]
    fn test_month_filter_wraps_under_both_policies() {
        for policy in [WrapPolicy::Clamp, WrapPolicy::RollOver] {
            let crops = vec![enrich_one("Зимова", "01.12", "31.01", 1.0, policy)];
            assert_eq!(filter_by_month(&crops, Some(11)).len(), 1);
            assert_eq!(filter_by_month(&crops, Some(0)).len(), 1);
            assert!(filter_by_month(&crops, Some(6)).is_empty());
        }
    }

    #[test]
    fn test_month_filter_membership() {
        // August (7) to October (9)
        let crops = vec![enrich_one("Баклажан", "08.08", "27.10", 285.0, WrapPolicy::Clamp)];
        assert_eq!(filter_by_month(&crops, Some(8)).len(), 1);
        assert_eq!(filter_by_month(&crops, Some(7)).len(), 1);
        assert_eq!(filter_by_month(&crops, Some(9)).len(), 1);
        assert!(filter_by_month(&crops, Some(11)).is_empty());
        assert!(filter_by_month(&crops, Some(6)).is_empty());
        assert_eq!(filter_by_month(&crops, None).len(), 1);
    }

    #[test]
    fn test_enrich_reports_offending_record() {
        let crops = vec![
            Crop::new("Огірок", "24.06", "23.08", 104.0),
            Crop::new("Кабачок", "24.06", "31.13", 340.0),
        ];
        let err = enrich_crops(&crops, YEAR, WrapPolicy::Clamp).unwrap_err();
        match err {
            DatasetError::InvalidDate { name, field, .. } => {
                assert_eq!(name, "Кабачок");
                assert_eq!(field, "endDate");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let crops = vec![Crop::new("Кабачок", "abc.01", "19.08", 340.0)];
        let err = enrich_crops(&crops, YEAR, WrapPolicy::Clamp).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidDate { field: "startDate", .. }));
    }

    #[test]
    fn test_colors_follow_input_order() {
        let crops: Vec<Crop> = (0..35)
            .map(|i| Crop::new(format!("Культура {i}"), "01.07", "31.07", 1.0))
            .collect();
        let enriched = enrich_crops(&crops, YEAR, WrapPolicy::Clamp).unwrap();
        assert_eq!(enriched[0].color, PALETTE[0]);
        assert_eq!(enriched[30].color, PALETTE[0]);
        assert_eq!(enriched[34].color, PALETTE[4]);
    }

    #[test]
    fn test_color_for_cycles() {
        for i in 0..PALETTE.len() {
            assert_eq!(color_for(i), color_for(i + PALETTE.len()));
            assert_eq!(color_for(i), color_for(i + 7 * PALETTE.len()));
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let crops = enrich_crops(
            &[
                Crop::new("Томат зебра", "24.07", "27.09", 6.0),
                Crop::new("Огірок", "24.06", "23.08", 104.0),
            ],
            YEAR,
            WrapPolicy::Clamp,
        )
        .unwrap();
        let found = filter_by_search(&crops, "ТОМАТ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Томат зебра");
        assert_eq!(filter_by_search(&crops, "").len(), 2);
        assert!(filter_by_search(&crops, "кавун").is_empty());
    }

    #[test]
    fn test_orderings_do_not_touch_input() {
        let crops = enrich_crops(
            &[
                Crop::new("Цукіні", "24.06", "19.08", 12.0),
                Crop::new("Баклажан", "08.08", "27.10", 285.0),
                Crop::new("Морква рання", "14.07", "03.08", 105.0),
            ],
            YEAR,
            WrapPolicy::Clamp,
        )
        .unwrap();

        let by_date = chronological(&crops);
        let names: Vec<&str> = by_date.iter().map(ChartCrop::name).collect();
        assert_eq!(names, ["Цукіні", "Морква рання", "Баклажан"]);

        let by_name = alphabetical(&crops);
        let names: Vec<&str> = by_name.iter().map(ChartCrop::name).collect();
        assert_eq!(names, ["Баклажан", "Морква рання", "Цукіні"]);

        assert_eq!(crops[0].name(), "Цукіні");
    }

    #[test]
    fn test_summarize() {
        let crops = enrich_crops(
            &[
                Crop::new("Баклажан", "08.08", "27.10", 285.0),
                Crop::new("Капуста броколі", "14.06", "19.10", 178.0),
                Crop::new("Гарбуз батернат", "04.09", "03.11", 12.5),
            ],
            YEAR,
            WrapPolicy::Clamp,
        )
        .unwrap();
        let summary = summarize(&crops);
        assert_eq!(summary.total_crops, 3);
        assert!((summary.total_yield - 475.5).abs() < 1e-9);
        assert_eq!(summary.total_yield_label, "475,5");
        assert_eq!(summary.earliest_start_date, "14.06");
        assert_eq!(summary.latest_end_date, "03.11");
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_crops, 0);
        assert_eq!(summary.earliest_start_date, "");
        assert_eq!(summary.season_label(), "");
    }

    #[test]
    fn test_find_crop() {
        let crops = enrich_crops(&[Crop::new("Огірок", "24.06", "23.08", 104.0)], YEAR, WrapPolicy::Clamp).unwrap();
        assert!(find_crop(&crops, "Огірок").is_some());
        assert!(find_crop(&crops, "огірок").is_none());
    }
}
