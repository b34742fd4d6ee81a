//! Month names and the month filter used by the dashboard
//!
//! Months are addressed by 0-based index (January = 0) at every boundary
//! the dashboard talks to.

use serde::Serialize;

/// Full Ukrainian month names, January first
pub const MONTH_NAMES_UK: [&str; 12] = [
    "Січень",
    "Лютий",
    "Березень",
    "Квітень",
    "Травень",
    "Червень",
    "Липень",
    "Серпень",
    "Вересень",
    "Жовтень",
    "Листопад",
    "Грудень",
];

/// Three-letter Ukrainian month labels used on chart axes
pub const MONTH_SHORT_NAMES_UK: [&str; 12] = [
    "Січ", "Лют", "Бер", "Кві", "Тра", "Чер", "Лип", "Сер", "Вер", "Жов", "Лис", "Гру",
];

/// Label of the "no month selected" filter option
pub const ALL_MONTHS_LABEL_UK: &str = "Всі місяці";

/// A selectable month in the dashboard's month filter
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MonthOption {
    /// 0-based month index
    pub num: u32,
    pub name: &'static str,
}

/// Months offered by the month filter (the growing season, June to November)
pub const MONTH_FILTER_OPTIONS: [MonthOption; 6] = [
    MonthOption { num: 5, name: "Червень" },
    MonthOption { num: 6, name: "Липень" },
    MonthOption { num: 7, name: "Серпень" },
    MonthOption { num: 8, name: "Вересень" },
    MonthOption { num: 9, name: "Жовтень" },
    MonthOption { num: 10, name: "Листопад" },
];

/// Check a 0-based month index
pub fn is_valid_month_index(month0: u32) -> bool {
    month0 < 12
}

/// Full Ukrainian name for a 0-based month index
pub fn month_name_uk(month0: u32) -> Option<&'static str> {
    MONTH_NAMES_UK.get(month0 as usize).copied()
}

/// Short Ukrainian label for a 0-based month index
pub fn month_short_name_uk(month0: u32) -> Option<&'static str> {
    MONTH_SHORT_NAMES_UK.get(month0 as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_match_month_names() {
        for option in MONTH_FILTER_OPTIONS {
            assert_eq!(month_name_uk(option.num), Some(option.name));
        }
    }

    #[test]
    fn test_month_lookup_bounds() {
        assert_eq!(month_short_name_uk(0), Some("Січ"));
        assert_eq!(month_short_name_uk(11), Some("Гру"));
        assert_eq!(month_short_name_uk(12), None);
        assert!(is_valid_month_index(11));
        assert!(!is_valid_month_index(12));
    }
}
