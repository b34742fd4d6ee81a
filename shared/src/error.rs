//! Error types for date parsing and dataset loading

use thiserror::Error;

/// Failure to interpret a `dd.mm` date string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{input}' is not a dd.mm date")]
    Format { input: String },

    #[error("'{input}' has a non-numeric {part}")]
    NotANumber { input: String, part: &'static str },

    #[error("'{input}' is out of range (day {day}, month {month})")]
    OutOfRange { input: String, day: u32, month: u32 },

    #[error("'{input}' does not exist in {year}")]
    NonexistentDate { input: String, year: i32 },
}

/// Failure to accept a crop dataset
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Crop '{name}' has an invalid {field}: {source}")]
    InvalidDate {
        name: String,
        field: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("Crop '{name}' failed validation: {message}")]
    Validation { name: String, message: String },

    #[error("Duplicate crop name: {0}")]
    DuplicateName(String),
}

impl DatasetError {
    /// Name of the offending record
    pub fn crop_name(&self) -> &str {
        match self {
            DatasetError::InvalidDate { name, .. } => name,
            DatasetError::Validation { name, .. } => name,
            DatasetError::DuplicateName(name) => name,
        }
    }
}
