//! Common types used across the workspace

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a harvest whose end day-month falls before its start day-month is treated.
///
/// One policy applies to a whole derivation pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WrapPolicy {
    /// The harvest has zero duration
    #[default]
    Clamp,
    /// The end date moves into the following year
    RollOver,
}

impl std::fmt::Display for WrapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WrapPolicy::Clamp => write!(f, "clamp"),
            WrapPolicy::RollOver => write!(f, "roll_over"),
        }
    }
}

impl std::str::FromStr for WrapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(WrapPolicy::Clamp),
            "roll_over" | "rollover" => Ok(WrapPolicy::RollOver),
            other => Err(format!("Unknown wrap policy: {}", other)),
        }
    }
}

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Overlap of two ranges, `None` when they are disjoint
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end < start {
            None
        } else {
            Some(DateRange { start, end })
        }
    }

    /// Number of days covered, both ends included
    pub fn days(&self) -> u32 {
        crate::calendar::inclusive_days(self.start, self.end)
    }
}

/// Filters applied to the dashboard views
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardQuery {
    /// Case-insensitive substring of the crop name
    pub search: Option<String>,
    /// 0-based month index
    pub month: Option<u32>,
    /// Crop to highlight on the timeline
    pub selected: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_intersect_overlapping() {
        let a = DateRange::new(date(6, 24), date(8, 23));
        let july = DateRange::new(date(7, 1), date(7, 31));
        assert_eq!(a.intersect(&july), Some(july));
        assert_eq!(a.intersect(&july).map(|r| r.days()), Some(31));
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = DateRange::new(date(6, 24), date(8, 23));
        let october = DateRange::new(date(10, 1), date(10, 31));
        assert_eq!(a.intersect(&october), None);
    }

    #[test]
    fn test_wrap_policy_parsing() {
        assert_eq!("clamp".parse::<WrapPolicy>(), Ok(WrapPolicy::Clamp));
        assert_eq!("Roll_Over".parse::<WrapPolicy>(), Ok(WrapPolicy::RollOver));
        assert!("wrap".parse::<WrapPolicy>().is_err());
        assert_eq!(WrapPolicy::default(), WrapPolicy::Clamp);
    }
}
