pub mod correlation;
pub mod dataset;
pub mod error;
pub mod genre;
pub mod rank;
pub mod segment;

pub use dataset::{Record, MIN_TOTAL_RATINGS};
pub use error::{ParadoxError, Result};
