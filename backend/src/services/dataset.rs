//! Crop dataset loading
//!
//! The dataset is read once at startup from a JSON array or a CSV file with
//! `name,startDate,endDate,yield` columns, or taken from the built-in
//! dataset when no path is configured. Every record is validated before the
//! server accepts requests.

use std::path::Path;

use shared::{default_crops, validate_dataset, Crop};

use crate::config::DatasetConfig;
use crate::error::{AppError, AppResult};

/// Source format of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    /// Format implied by the file extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(DatasetFormat::Json),
            Some("csv") => Ok(DatasetFormat::Csv),
            _ => Err(AppError::Configuration(format!(
                "Unsupported dataset file '{}', expected .json or .csv",
                path.display()
            ))),
        }
    }
}

pub struct DatasetService;

impl DatasetService {
    /// Load and validate the configured dataset
    pub fn load(config: &DatasetConfig) -> AppResult<Vec<Crop>> {
        let reference_year = config.reference_year();
        let crops = match config.path.as_deref() {
            Some(path) => Self::read_file(Path::new(path))?,
            None => {
                tracing::info!("No dataset path configured, using the built-in dataset");
                default_crops()
            }
        };

        validate_dataset(&crops, reference_year, config.wrap_policy)?;
        tracing::info!(
            "Loaded {} crops for reference year {}",
            crops.len(),
            reference_year
        );
        Ok(crops)
    }

    /// Read a dataset file in the format its extension names
    pub fn read_file(path: &Path) -> AppResult<Vec<Crop>> {
        let format = DatasetFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::DatasetLoad(format!("cannot read '{}': {}", path.display(), e))
        })?;
        tracing::debug!("Reading {:?} dataset from {}", format, path.display());

        match format {
            DatasetFormat::Json => Self::parse_json(&content),
            DatasetFormat::Csv => Self::parse_csv(&content),
        }
    }

    pub fn parse_json(content: &str) -> AppResult<Vec<Crop>> {
        serde_json::from_str(content)
            .map_err(|e| AppError::DatasetLoad(format!("invalid JSON: {}", e)))
    }

    pub fn parse_csv(content: &str) -> AppResult<Vec<Crop>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        reader
            .deserialize()
            .enumerate()
            .map(|(row, record)| {
                record.map_err(|e| {
                    AppError::DatasetLoad(format!("invalid CSV record {}: {}", row + 1, e))
                })
            })
            .collect()
    }
}
