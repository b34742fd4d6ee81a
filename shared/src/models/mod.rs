//! Domain models for the harvest schedule

mod crop;
mod summary;

pub use crop::*;
pub use summary::*;
