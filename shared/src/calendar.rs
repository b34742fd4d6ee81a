//! Calendar arithmetic over `dd.mm` day-month strings
//!
//! All dates are `chrono::NaiveDate` values: no time of day, no timezone.
//! The reference year is always passed in explicitly.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::ParseError;

/// Parse a `dd.mm` string into a date of `reference_year`.
///
/// Both parts must be integers, the day in 1-31 and the month in 1-12, and
/// the pair must exist in the reference year (`31.04` is rejected, as is
/// `29.02` outside a leap year).
pub fn parse_day_month(input: &str, reference_year: i32) -> Result<NaiveDate, ParseError> {
    let trimmed = input.trim();
    let mut parts = trimmed.split('.');
    let (day_part, month_part) = match (parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), None) if !day.is_empty() && !month.is_empty() => (day, month),
        _ => {
            return Err(ParseError::Format {
                input: input.to_string(),
            })
        }
    };

    let day: u32 = day_part.parse().map_err(|_| ParseError::NotANumber {
        input: input.to_string(),
        part: "day",
    })?;
    let month: u32 = month_part.parse().map_err(|_| ParseError::NotANumber {
        input: input.to_string(),
        part: "month",
    })?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(ParseError::OutOfRange {
            input: input.to_string(),
            day,
            month,
        });
    }

    NaiveDate::from_ymd_opt(reference_year, month, day).ok_or_else(|| {
        ParseError::NonexistentDate {
            input: input.to_string(),
            year: reference_year,
        }
    })
}

/// 1-based ordinal day of `date` within its own year (Jan 1 = 1).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Whole days from `start` to `end`, both included. Zero when `end < start`.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days();
    if days < 0 {
        0
    } else {
        days as u32 + 1
    }
}

/// Format a date back into `dd.mm`
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{:02}.{:02}", date.day(), date.month())
}

/// First and last day of the month with 0-based index `month0` in `year`.
///
/// Returns `None` for an index outside 0-11.
pub fn month_window(year: i32, month0: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}
