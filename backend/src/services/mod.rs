//! Business logic services for the Harvest Schedule server

pub mod dashboard;
pub mod dataset;

pub use dashboard::DashboardService;
pub use dataset::DatasetService;
