//! Dataset-wide summary figures shown on the dashboard cards

use serde::Serialize;

/// Aggregates over the whole, unfiltered dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub total_crops: usize,
    pub total_yield: f64,
    /// `total_yield` formatted for the `uk-UA` locale
    pub total_yield_label: String,
    /// Earliest harvest start, `dd.mm`; empty for an empty dataset
    pub earliest_start_date: String,
    /// Latest harvest end, `dd.mm`; empty for an empty dataset
    pub latest_end_date: String,
}

impl DatasetSummary {
    /// Season label, e.g. `14.06 - 03.11`
    pub fn season_label(&self) -> String {
        if self.earliest_start_date.is_empty() {
            return String::new();
        }
        format!("{} - {}", self.earliest_start_date, self.latest_end_date)
    }
}

/// Format a tonnage the way `uk-UA` number formatting does: non-breaking
/// space between thousands groups, comma as the decimal separator and at
/// most three fraction digits.
pub fn format_tonnes(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(*c);
    }

    let mut out = String::new();
    if value < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tonnes_groups_thousands() {
        assert_eq!(format_tonnes(3706.0), "3\u{a0}706");
        assert_eq!(format_tonnes(1_234_567.0), "1\u{a0}234\u{a0}567");
        assert_eq!(format_tonnes(706.0), "706");
        assert_eq!(format_tonnes(0.0), "0");
    }

    #[test]
    fn test_format_tonnes_fraction() {
        assert_eq!(format_tonnes(1584.5), "1\u{a0}584,5");
        assert_eq!(format_tonnes(7.125), "7,125");
        assert_eq!(format_tonnes(2.00049), "2");
        assert_eq!(format_tonnes(-12.5), "-12,5");
    }

    #[test]
    fn test_season_label() {
        let summary = DatasetSummary {
            total_crops: 1,
            total_yield: 1.0,
            total_yield_label: "1".to_string(),
            earliest_start_date: "14.06".to_string(),
            latest_end_date: "03.11".to_string(),
        };
        assert_eq!(summary.season_label(), "14.06 - 03.11");
    }
}
