//! HTTP request handlers for the Harvest Schedule server

mod crops;
mod export;
mod health;
mod summary;

pub use crops::*;
pub use export::*;
pub use health::*;
pub use summary::*;
