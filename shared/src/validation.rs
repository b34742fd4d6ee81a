//! Validation of crop records before they enter the derivation engine
//!
//! The dataset is small and hand-maintained, so a bad record is rejected
//! outright instead of being skipped or coerced.

use std::collections::HashSet;

use chrono::Datelike;
use validator::Validate;

use crate::calendar::parse_day_month;
use crate::derivation::derive_harvest_window;
use crate::error::DatasetError;
use crate::models::{Crop, HarvestWindow};
use crate::types::WrapPolicy;

// ============================================================================
// Record Validations
// ============================================================================

/// Validate a single crop: field constraints plus its harvest window under
/// `policy`, so that a record accepted here also derives cleanly
pub fn validate_crop(crop: &Crop, reference_year: i32, policy: WrapPolicy) -> Result<(), DatasetError> {
    crop.validate().map_err(|e| DatasetError::Validation {
        name: crop.name.clone(),
        message: e.to_string(),
    })?;

    if !crop.yield_tonnes.is_finite() {
        return Err(DatasetError::Validation {
            name: crop.name.clone(),
            message: "yield must be a finite number".to_string(),
        });
    }

    if crop.name.trim().is_empty() {
        return Err(DatasetError::Validation {
            name: crop.name.clone(),
            message: "name must not be blank".to_string(),
        });
    }

    let window = derive_window(crop, reference_year, policy)?;
    if window.end < window.start {
        tracing::warn!(
            crop = %crop.name,
            start = %crop.start_date,
            end = %crop.end_date,
            "Harvest crosses the year boundary; duration clamped to zero"
        );
    } else if window.end.year() > window.start.year() {
        tracing::info!(
            crop = %crop.name,
            start = %crop.start_date,
            end = %crop.end_date,
            "Harvest rolls over into the following year"
        );
    }

    Ok(())
}

fn derive_window(crop: &Crop, reference_year: i32, policy: WrapPolicy) -> Result<HarvestWindow, DatasetError> {
    parse_day_month(&crop.start_date, reference_year).map_err(|source| {
        DatasetError::InvalidDate {
            name: crop.name.clone(),
            field: "startDate",
            source,
        }
    })?;
    derive_harvest_window(crop, reference_year, policy).map_err(|source| {
        DatasetError::InvalidDate {
            name: crop.name.clone(),
            field: "endDate",
            source,
        }
    })
}

// ============================================================================
// Dataset Validations
// ============================================================================

/// Validate every record and the uniqueness of crop names.
///
/// Stops at the first offending record. Year-crossing records are logged
/// here, once per load, rather than on every derivation pass.
pub fn validate_dataset(crops: &[Crop], reference_year: i32, policy: WrapPolicy) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(crops.len());
    for crop in crops {
        validate_crop(crop, reference_year, policy)?;
        if !seen.insert(crop.name.as_str()) {
            return Err(DatasetError::DuplicateName(crop.name.clone()));
        }
    }
    Ok(())
}
