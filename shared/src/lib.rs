//! Shared types and the calendar derivation engine for the harvest schedule
//!
//! This crate contains everything the backend and the browser (via WASM)
//! compute from the crop dataset: day-of-year windows, month apportioned
//! yields, filtered and sorted views, chart geometry and the text export.

pub mod calendar;
pub mod chart;
pub mod collation;
pub mod dataset;
pub mod derivation;
pub mod error;
pub mod export;
pub mod models;
pub mod month;
pub mod types;
pub mod validation;
pub mod view;

pub use calendar::*;
pub use chart::*;
pub use collation::*;
pub use dataset::*;
pub use derivation::*;
pub use error::*;
pub use export::*;
pub use models::*;
pub use month::*;
pub use types::*;
pub use validation::*;
pub use view::*;
